//! Test fixtures - reusable content constants for tests.

/// Home page with an updates region
pub const INDEX_PAGE: &str = "# Welcome\n\nLatest posts:\n\n<!-- BEGIN AUTO UPDATES -->\nstale\n<!-- END AUTO UPDATES -->\n\nThanks for reading.\n";

/// Archive page with an archives region
pub const ARCHIVES_PAGE: &str = "# Archives\n\n<!-- BEGIN AUTO ARCHIVES -->\n<!-- END AUTO ARCHIVES -->\n";

/// Page with no markers at all
pub const UNMARKED_PAGE: &str = "# Welcome\n\nNothing generated here.\n";

/// Document titled through front matter
pub const FRONTMATTER_DOC: &str = "---\ntitle: \"Getting Started\"\n---\n# Ignored Heading\n\nBody.\n";

/// Document titled through its heading
pub const HEADING_DOC: &str = "# Deploy Guide\n\nSteps.\n";

/// Document with no title source
pub const PLAIN_DOC: &str = "Just some notes.\n";
