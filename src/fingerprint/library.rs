//! Built-in platform fingerprints.
//!
//! Each entry pairs a regular expression with its confidence tier and a
//! human-readable description. Platforms are listed in tie-break order: when two
//! platforms reach the same best score, the one declared first wins.
//!
//! Platform-specific header checks (Wix's server signature, Shopify's shop id)
//! live here as ordinary `HeaderSpec` rules; the matcher has no per-platform
//! branches.

use crate::fingerprint::models::{FingerprintSpec, HeaderSpec, PatternSpec};
use crate::models::Confidence;

const fn high(pattern: &'static str, description: &'static str) -> PatternSpec {
    PatternSpec {
        pattern,
        confidence: Confidence::High,
        description,
    }
}

const fn medium(pattern: &'static str, description: &'static str) -> PatternSpec {
    PatternSpec {
        pattern,
        confidence: Confidence::Medium,
        description,
    }
}

const fn low(pattern: &'static str, description: &'static str) -> PatternSpec {
    PatternSpec {
        pattern,
        confidence: Confidence::Low,
        description,
    }
}

const fn header(
    header: &'static str,
    pattern: &'static str,
    confidence: Confidence,
    description: &'static str,
) -> HeaderSpec {
    HeaderSpec {
        header,
        pattern,
        confidence,
        description,
    }
}

/// `<meta name="generator">` whose content mentions `$brand`, in either
/// attribute order.
macro_rules! generator_meta {
    ($brand:literal) => {
        concat!(
            r#"<meta\b[^>]*\bname\s*=\s*["']generator["'][^>]*\bcontent\s*=\s*["'][^"']*"#,
            $brand,
            r#"|<meta\b[^>]*\bcontent\s*=\s*["'][^"']*"#,
            $brand,
            r#"[^"']*["'][^>]*\bname\s*=\s*["']generator["']"#
        )
    };
}

pub(crate) use generator_meta;

/// Every built-in platform, in tie-break order.
pub static PLATFORM_FINGERPRINTS: &[FingerprintSpec] = &[
    FingerprintSpec {
        platform: "Webflow",
        hostnames: &[high(r"\.webflow\.io$", "Hosted on a webflow.io subdomain")],
        meta_tags: &[high(generator_meta!("webflow"), "Webflow generator meta tag")],
        html_comments: &[high(
            r"<!--\s*This site was created in Webflow",
            "Webflow signature comment",
        )],
        dom_attributes: &[
            high(r#"\bdata-wf-page\s*=\s*["']"#, "Webflow page id attribute"),
            high(r#"\bdata-wf-site\s*=\s*["']"#, "Webflow site id attribute"),
        ],
        css: &[medium(
            r#"class\s*=\s*["'][^"']*\bw-(?:nav|container|button|form|richtext|embed|layout-grid)\b"#,
            "Webflow built-in component classes",
        )],
        js_globals: &[medium(r"\bWebflow\s*\.\s*push\s*\(", "Webflow runtime global")],
        sources: &[
            high(r"(?:^|//)(?:assets|cdn\.prod)\.website-files\.com/", "Webflow asset CDN"),
            high(r"(?:^|//)uploads-ssl\.webflow\.com/", "Webflow upload CDN"),
            medium(r"d3e54v103j8qbb\.cloudfront\.net/", "Webflow-hosted jQuery bundle"),
        ],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Wix",
        hostnames: &[
            high(r"\.wixsite\.com$", "Hosted on a wixsite.com subdomain"),
            high(r"\.wixstudio\.(?:io|com)$", "Hosted on a Wix Studio subdomain"),
        ],
        headers: &[
            header("server", r"^pepyaka", Confidence::High, "Wix Pepyaka server signature"),
            header("x-wix-request-id", "^", Confidence::High, "Wix request id header"),
            header(
                "x-wix-renderer-server",
                "^",
                Confidence::Medium,
                "Wix renderer deployment header",
            ),
        ],
        meta_tags: &[high(generator_meta!("wix"), "Wix generator meta tag")],
        dom_attributes: &[
            medium(r#"\bid\s*=\s*["']SITE_CONTAINER["']"#, "Wix site container"),
            medium(r#"\bdata-mesh-id\s*=\s*["']"#, "Wix mesh layout attribute"),
        ],
        js_globals: &[
            medium(r"\bwixBiSession\b", "Wix BI session global"),
            medium(r"\bwixPerformanceMeasurements\b", "Wix performance global"),
        ],
        sources: &[
            high(r"(?:^|//)static\.wixstatic\.com/", "Wix static media CDN"),
            high(r"(?:^|//)static\.parastorage\.com/", "Wix Parastorage CDN"),
        ],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Squarespace",
        hostnames: &[high(r"\.squarespace\.com$", "Hosted on a squarespace.com subdomain")],
        headers: &[
            header("server", r"^squarespace", Confidence::High, "Squarespace server header"),
            header(
                "x-served-by",
                r"^squarespace$",
                Confidence::Medium,
                "Squarespace site confirmation header",
            ),
        ],
        html_comments: &[high(r"<!--\s*This is Squarespace\.\s*-->", "Squarespace signature comment")],
        css: &[medium(
            r#"class\s*=\s*["'][^"']*\bsqs-(?:block|layout|row|col)\b"#,
            "Squarespace layout classes",
        )],
        js_globals: &[
            high(r"\bStatic\.SQUARESPACE_CONTEXT\b", "Squarespace context global"),
            medium(r"\bSquarespace\.afterBodyLoad\b", "Squarespace lifecycle hook"),
        ],
        sources: &[
            high(r"(?:^|//)static1\.squarespace\.com/", "Squarespace static CDN"),
            high(r"(?:^|//)assets\.squarespace\.com/", "Squarespace asset CDN"),
            high(r"(?:^|//)images\.squarespace-cdn\.com/", "Squarespace image CDN"),
        ],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Framer",
        hostnames: &[high(
            r"\.framer\.(?:website|app|ai|media|photos)$",
            "Hosted on a Framer subdomain",
        )],
        headers: &[header("server", r"^framer", Confidence::High, "Framer server header")],
        meta_tags: &[high(generator_meta!("framer"), "Framer generator meta tag")],
        dom_attributes: &[
            high(r#"\bid\s*=\s*["']__framer-badge-container["']"#, "Framer badge container"),
            medium(r#"\bdata-framer-name\s*=\s*["']"#, "Framer layer name attribute"),
        ],
        css: &[low(r"\bframer-[a-z0-9]{5,}\b", "Framer generated class names")],
        sources: &[
            high(r"(?:^|//)framerusercontent\.com/", "Framer user content CDN"),
            medium(r"(?:^|//)events\.framer\.com/", "Framer analytics endpoint"),
        ],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Shopify",
        hostnames: &[high(r"\.myshopify\.com$", "Hosted on a myshopify.com subdomain")],
        headers: &[
            header("x-shopid", "^", Confidence::High, "Shopify shop id header"),
            header("x-shopify-stage", "^", Confidence::High, "Shopify deployment stage header"),
            header("powered-by", r"^shopify$", Confidence::High, "Shopify powered-by header"),
        ],
        js_globals: &[
            high(r"\bShopify\.theme\b", "Shopify theme global"),
            medium(r"\bwindow\.Shopify\b", "Shopify runtime global"),
        ],
        sources: &[high(r"(?:^|//)cdn\.shopify\.com/", "Shopify CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Carrd",
        hostnames: &[high(r"\.carrd\.co$", "Hosted on a carrd.co subdomain")],
        meta_tags: &[high(generator_meta!("carrd"), "Carrd generator meta tag")],
        sources: &[medium(r"(?:^|//)carrd\.co/", "Carrd asset URL")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Weebly",
        hostnames: &[high(r"\.weebly(?:site)?\.com$", "Hosted on a Weebly subdomain")],
        js_globals: &[medium(r"\b_W\.configDomain\b", "Weebly configuration global")],
        sources: &[high(r"(?:^|//)cdn\d*\.editmysite\.com/", "Weebly editmysite CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "GoDaddy Website Builder",
        hostnames: &[high(r"\.godaddysites\.com$", "Hosted on a godaddysites.com subdomain")],
        meta_tags: &[high(
            generator_meta!("go daddy website builder"),
            "GoDaddy Website Builder generator meta tag",
        )],
        sources: &[medium(r"(?:^|//)img\d*\.wsimg\.com/", "GoDaddy wsimg CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Hostinger Website Builder",
        hostnames: &[
            high(r"\.zyrosite\.com$", "Hosted on a zyrosite.com subdomain"),
            high(r"\.hostingersite\.com$", "Hosted on a hostingersite.com subdomain"),
        ],
        meta_tags: &[high(
            generator_meta!("(?:hostinger website builder|zyro)"),
            "Hostinger Website Builder generator meta tag",
        )],
        sources: &[high(r"(?:^|//)assets\.zyrosite\.com/", "Zyro asset CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Duda",
        hostnames: &[high(r"\.multiscreensite\.com$", "Hosted on a Duda preview subdomain")],
        dom_attributes: &[medium(r#"\bid\s*=\s*["']dm_content["']"#, "Duda content root")],
        js_globals: &[medium(r"\bwindow\._dudaBrand\b|\bdmAPI\b", "Duda runtime global")],
        sources: &[high(r"(?:^|//)irp(?:-cdn)?\.(?:multiscreensite|cdn-website)\.com/", "Duda CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Jimdo",
        hostnames: &[high(r"\.jimdo(?:site|free)?\.com$", "Hosted on a Jimdo subdomain")],
        js_globals: &[medium(r"\bjimdoData\b", "Jimdo data global")],
        sources: &[high(r"(?:^|//)assets\.jimstatic\.com/", "Jimdo static CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Strikingly",
        hostnames: &[high(r"\.(?:my)?strikingly\.com$", "Hosted on a Strikingly subdomain")],
        sources: &[high(
            r"(?:^|//)static-assets\.strikinglycdn\.com/",
            "Strikingly asset CDN",
        )],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Tilda",
        hostnames: &[high(r"\.tilda\.ws$", "Hosted on a tilda.ws subdomain")],
        dom_attributes: &[high(r#"\bdata-tilda-page-id\s*=\s*["']"#, "Tilda page id attribute")],
        sources: &[high(r"(?:^|//)static\.tildacdn\.[a-z]+/", "Tilda static CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Bubble",
        hostnames: &[high(r"\.bubbleapps\.io$", "Hosted on a bubbleapps.io subdomain")],
        js_globals: &[medium(r"\bbubble_session_uid\b|\bwindow\._bubble_page_load_data\b", "Bubble runtime global")],
        sources: &[high(r"(?:^|//)dd7tel2830j4w\.cloudfront\.net/", "Bubble asset CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Softr",
        hostnames: &[high(r"\.softr\.app$", "Hosted on a softr.app subdomain")],
        sources: &[high(r"(?:^|//)(?:assets\.softr-files\.com|softr-prod\.imgix\.net)/", "Softr asset CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Durable",
        hostnames: &[high(r"\.durable\.co$", "Hosted on a durable.co subdomain")],
        meta_tags: &[high(generator_meta!("durable"), "Durable generator meta tag")],
        sources: &[high(r"(?:^|//)cdn\.durable\.co/", "Durable asset CDN")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Lovable",
        hostnames: &[
            high(r"\.lovable\.app$", "Hosted on a lovable.app subdomain"),
            high(r"\.lovableproject\.com$", "Hosted on a Lovable preview subdomain"),
        ],
        meta_tags: &[high(
            r#"<meta\b[^>]*\bcontent\s*=\s*["']Lovable Generated Project["']"#,
            "Lovable default meta description",
        )],
        sources: &[
            high(r"(?:^|//)cdn\.gpteng\.co/", "Lovable (GPT Engineer) script CDN"),
            medium(r"(?:^|//)lovable\.dev/opengraph-image", "Lovable default social image"),
        ],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Bolt",
        hostnames: &[high(r"\.bolt\.host$", "Hosted on a bolt.host subdomain")],
        meta_tags: &[high(generator_meta!("bolt"), "Bolt generator meta tag")],
        html_comments: &[medium(r"<!--[^>]*\bbolt\.new\b", "Bolt attribution comment")],
        ..FingerprintSpec::EMPTY
    },
    FingerprintSpec {
        platform: "Notion",
        hostnames: &[high(r"\.notion\.site$", "Hosted on a notion.site subdomain")],
        sources: &[medium(r"(?:^|//)(?:www\.)?notion\.so/(?:_assets|image)/", "Notion asset URL")],
        inline_scripts: &[medium(r"<script\b[^>]*>[^<]*\bCONFIG\.notionDomain\b", "Notion bootstrap script")],
        ..FingerprintSpec::EMPTY
    },
];
