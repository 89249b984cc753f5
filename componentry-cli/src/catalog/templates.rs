//! Page template manifests

use super::{Manifest, ManifestFile};
use crate::ItemKind;
use crate::OutputFormat::{Typed, Untyped};

/// All installable templates
pub const TEMPLATES: &[Manifest] = &[
    Manifest {
        name: "not-found",
        kind: ItemKind::Template,
        description: "404 page with illustration and navigation back home",
        files: &[
            ManifestFile::variant("NotFound.tsx", "templates/not-found/NotFound.tsx", Typed),
            ManifestFile::variant("NotFound.jsx", "templates/not-found/NotFound.jsx", Untyped),
        ],
        dependencies: &[],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: Some("error-pages"),
        export_name: "NotFound",
        entry: "NotFound",
    },
    Manifest {
        name: "server-error",
        kind: ItemKind::Template,
        description: "500 page with retry action",
        files: &[
            ManifestFile::variant(
                "ServerError.tsx",
                "templates/server-error/ServerError.tsx",
                Typed,
            ),
            ManifestFile::variant(
                "ServerError.jsx",
                "templates/server-error/ServerError.jsx",
                Untyped,
            ),
        ],
        dependencies: &[],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: Some("error-pages"),
        export_name: "ServerError",
        entry: "ServerError",
    },
    Manifest {
        name: "glitch-error",
        kind: ItemKind::Template,
        description: "Error page with animated glitch heading",
        files: &[
            ManifestFile::variant(
                "GlitchError.tsx",
                "templates/glitch-error/GlitchError.tsx",
                Typed,
            ),
            ManifestFile::variant(
                "GlitchError.jsx",
                "templates/glitch-error/GlitchError.jsx",
                Untyped,
            ),
            ManifestFile::shared("glitch.css", "templates/glitch-error/glitch.css"),
        ],
        dependencies: &["framer-motion"],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: Some("error-pages"),
        export_name: "GlitchError",
        entry: "GlitchError",
    },
    Manifest {
        name: "maintenance",
        kind: ItemKind::Template,
        description: "Scheduled maintenance page with countdown",
        files: &[
            ManifestFile::variant(
                "Maintenance.tsx",
                "templates/maintenance/Maintenance.tsx",
                Typed,
            ),
            ManifestFile::variant(
                "Maintenance.jsx",
                "templates/maintenance/Maintenance.jsx",
                Untyped,
            ),
        ],
        dependencies: &[],
        dev_dependencies: &["@tailwindcss/typography"],
        requires_tailwind: true,
        category: Some("status-pages"),
        export_name: "Maintenance",
        entry: "Maintenance",
    },
    Manifest {
        name: "coming-soon",
        kind: ItemKind::Template,
        description: "Launch page with email signup form",
        files: &[
            ManifestFile::variant("ComingSoon.tsx", "templates/coming-soon/ComingSoon.tsx", Typed),
            ManifestFile::variant(
                "ComingSoon.jsx",
                "templates/coming-soon/ComingSoon.jsx",
                Untyped,
            ),
        ],
        dependencies: &["lucide-react"],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: Some("status-pages"),
        export_name: "ComingSoon",
        entry: "ComingSoon",
    },
];
