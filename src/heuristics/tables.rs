//! Pattern tables and thresholds for the AI heuristics.
//!
//! Every table is plain data; `HeuristicPatterns::compile` turns the regex
//! tables into compiled form once per process.

use crate::fingerprint::generator_meta;

// Over-explanation: tutorial-style comment phrasing
pub(crate) const OVER_EXPLAINED_MANY: usize = 5;
pub(crate) const OVER_EXPLAINED_SOME: usize = 2;

pub(crate) const OVER_EXPLAINED_PATTERNS: &[&str] = &[
    r"//[ \t]*(?:This|These)\s+(?:function|component|section|hook|effect|handler|helper|state|variable)s?\s+(?:is|are|will|handles?|renders?|creates?|manages?|ensures?)\b",
    r"//[ \t]*(?:Here we|Now we|First,? we|Next,? we|Then,? we|Finally,? we|We need to|We use|Let's)\b",
    r"/\*+\s*(?:This|Here we|The following)\s+[a-z]+",
    r"//[ \t]*(?:Step\s+\d+\s*:|TODO:\s*(?:Replace|Add|Implement|Connect))",
    r"//[ \t]*(?:Add|Update|Replace)\s+(?:your|with your)\b",
    r"<!--\s*(?:Hero|Main|Header|Footer|Navigation|Nav|Features?|About|Contact|Testimonials?|Pricing|CTA|Call to Action|FAQ)(?:\s+(?:Section|Area|Content|Component))?\s*-->",
    r"\{\s*/\*\s*[a-z][a-z ]{2,40}\s(?:Section|Component|Area)\s*\*/\s*\}",
];

// Component-library signatures (shadcn/ui on Radix primitives)
pub(crate) const COMPONENT_MANY: usize = 3;
pub(crate) const COMPONENT_SOME: usize = 1;

pub(crate) const COMPONENT_PATTERNS: &[&str] = &[
    r"\bdata-radix-[a-z-]+",
    r#"\bid\s*=\s*["']radix-:?r[0-9a-z]+:?["']"#,
    r#"\bdata-state\s*=\s*["'](?:open|closed|active|inactive|checked|unchecked)["']"#,
    r#"\bdata-slot\s*=\s*["'](?:button|card|card-header|dialog|input|badge|sheet)["']"#,
    r"\bring-offset-background\b",
    r"\btext-muted-foreground\b",
    r"\btext-primary-foreground\b",
    r"\bfocus-visible:ring-ring\b",
    r"\bdata-sonner-toaster\b",
];

// Utility-CSS families (Tailwind-style class vocabularies)
pub(crate) const UTILITY_FAMILIES_MIN: usize = 2;

pub(crate) const UTILITY_CSS_PATTERNS: &[&str] = &[
    r"\b(?:flex|grid|inline-flex)\s+(?:items|justify|gap|flex|grid-cols)-[a-z0-9]+",
    r"\b(?:p|px|py|pt|pb|pl|pr|m|mx|my|mt|mb|ml|mr)-(?:\d+(?:\.5)?|px)\b",
    r"\btext-(?:xs|sm|base|lg|[2-9]?xl)\b",
    r"\b(?:bg|text|border)-(?:slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)-\d{2,3}\b",
    r"\b(?:sm|md|lg|xl|2xl):[a-z][a-z0-9-]*",
    r"\b(?:hover|focus|active|dark):[a-z][a-z0-9-]*",
    r"\b(?:rounded|shadow)-(?:sm|md|lg|xl|2xl|3xl|full|none)\b",
];

// Bundler output and single-page-app mount points
pub(crate) const BUILD_ARTIFACT_PATTERNS: &[&str] = &[
    r"/assets/index-[a-z0-9_-]{8,}\.(?:js|css)\b",
    r"/_next/static/",
    r"/static/js/main\.[a-f0-9]{8}\.(?:chunk\.)?js\b",
    r"/@vite/client\b",
    r"/_astro/[a-z0-9_.-]+\.(?:js|css)\b",
];

pub(crate) const SPA_ROOT_PATTERNS: &[&str] = &[
    r#"<div\s+id\s*=\s*["'](?:root|app|__next|__nuxt|svelte)["']"#,
];

// Icon libraries common in generated UIs
pub(crate) const ICON_LIBRARY_PATTERNS: &[&str] = &[
    r"\blucide(?:-react)?\b",
    r"\bheroicons\b",
    r"\bdata-lucide\b",
    r#"viewBox\s*=\s*["']0 0 24 24["'][^>]*fill\s*=\s*["']none["'][^>]*stroke\s*=\s*["']currentColor["'][^>]*stroke-width\s*=\s*["']2["']"#,
    r#"\bd\s*=\s*["']M4 6h16M4 12h16M4 18h16["']"#,
];

// Default typeface of generated designs
pub(crate) const DEFAULT_FONT_PATTERNS: &[&str] = &[
    r#"fonts\.googleapis\.com/css2?\?[^"'>]*family=Inter\b"#,
    r"font-family\s*:\s*[\x22']?Inter\b",
    r"@fontsource(?:-variable)?/inter\b",
    r"rsms\.me/inter/",
];

// Placeholder or hallucinated link targets
pub(crate) const PLACEHOLDER_MANY: usize = 3;
pub(crate) const PLACEHOLDER_SOME: usize = 1;

pub(crate) const PLACEHOLDER_PATTERNS: &[&str] = &[
    r"\bhttps?://(?:www\.)?example\.(?:com|org|net)\b",
    r"\b[a-z0-9._%+-]+@example\.(?:com|org|net)\b",
    r"\bapi\.example\.com\b",
    r"\b(?:your-?domain|your-?website|yoursite|yourcompany)\.com\b",
    r"\bvia\.placeholder\.com\b|\bplaceholder\.com/",
    r"/api/placeholder/\d+",
];

// Numbered generic container names (section-1, wrapper2, ...)
pub(crate) const GENERIC_NAMING_MANY: usize = 4;
pub(crate) const GENERIC_NAMING_SOME: usize = 2;

pub(crate) const CLASS_OR_ID_PATTERN: &str = r#"\b(?:class|id)\s*=\s*["']([^"']*)["']"#;
pub(crate) const GENERIC_NAME_PATTERN: &str =
    r"\b(?:container|wrapper|section|box|block|div|element|content)[-_]?\d+\b";

/// Known AI website builders that announce themselves in a generator tag.
pub(crate) const AI_GENERATOR_PATTERN: &str = generator_meta!(
    r"(?:lovable|bolt\.new|\bbolt\b|\bv0\b|durable|10web|hostinger ai|relume|mixo|\bdora\b|wegic|\bb12\b|create\.xyz|gpt ?engineer)"
);

/// Zero-config hosting providers and the subdomain suffix they hand out.
pub(crate) const PROTOTYPE_HOSTS: &[(&str, &str)] = &[
    (".vercel.app", "Vercel"),
    (".netlify.app", "Netlify"),
    (".pages.dev", "Cloudflare Pages"),
    (".replit.app", "Replit"),
    (".repl.co", "Replit"),
    (".glitch.me", "Glitch"),
    (".onrender.com", "Render"),
    (".fly.dev", "Fly.io"),
    (".surge.sh", "Surge"),
    (".github.io", "GitHub Pages"),
    (".web.app", "Firebase Hosting"),
    (".firebaseapp.com", "Firebase Hosting"),
    (".up.railway.app", "Railway"),
    (".herokuapp.com", "Heroku"),
    (".deno.dev", "Deno Deploy"),
    (".csb.app", "CodeSandbox"),
];

/// Response headers that identify the same providers without their subdomain.
pub(crate) const HOSTING_HEADERS: &[(&str, &str)] = &[
    ("x-vercel-id", "Vercel"),
    ("x-nf-request-id", "Netlify"),
    ("x-render-origin-server", "Render"),
    ("fly-request-id", "Fly.io"),
    ("x-github-request-id", "GitHub Pages"),
];
