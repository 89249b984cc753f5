//! UI component manifests

use super::{Manifest, ManifestFile};
use crate::ItemKind;
use crate::OutputFormat::{Typed, Untyped};

/// All installable components
pub const COMPONENTS: &[Manifest] = &[
    Manifest {
        name: "button",
        kind: ItemKind::Component,
        description: "Animated button with primary, secondary and ghost variants",
        files: &[
            ManifestFile::variant("Button.tsx", "components/button/Button.tsx", Typed),
            ManifestFile::variant("Button.jsx", "components/button/Button.jsx", Untyped),
            ManifestFile::shared(
                "button-animations.css",
                "components/button/button-animations.css",
            ),
        ],
        dependencies: &["framer-motion"],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: None,
        export_name: "Button",
        entry: "Button",
    },
    Manifest {
        name: "toast",
        kind: ItemKind::Component,
        description: "Stacked toast notifications with auto-dismiss",
        files: &[
            ManifestFile::variant("Toast.tsx", "components/toast/Toast.tsx", Typed),
            ManifestFile::variant("useToast.ts", "components/toast/useToast.ts", Typed),
            ManifestFile::variant("Toast.jsx", "components/toast/Toast.jsx", Untyped),
            ManifestFile::variant("useToast.js", "components/toast/useToast.js", Untyped),
        ],
        dependencies: &["clsx", "framer-motion"],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: None,
        export_name: "Toast",
        entry: "Toast",
    },
    Manifest {
        name: "badge",
        kind: ItemKind::Component,
        description: "Status badge with colour presets",
        files: &[
            ManifestFile::variant("Badge.tsx", "components/badge/Badge.tsx", Typed),
            ManifestFile::variant("Badge.jsx", "components/badge/Badge.jsx", Untyped),
        ],
        dependencies: &["clsx"],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: None,
        export_name: "Badge",
        entry: "Badge",
    },
    Manifest {
        name: "spinner",
        kind: ItemKind::Component,
        description: "CSS-only loading spinner",
        files: &[
            ManifestFile::variant("Spinner.tsx", "components/spinner/Spinner.tsx", Typed),
            ManifestFile::variant("Spinner.jsx", "components/spinner/Spinner.jsx", Untyped),
            ManifestFile::shared("spinner.css", "components/spinner/spinner.css"),
        ],
        dependencies: &[],
        dev_dependencies: &[],
        requires_tailwind: false,
        category: None,
        export_name: "Spinner",
        entry: "Spinner",
    },
    Manifest {
        name: "copy-button",
        kind: ItemKind::Component,
        description: "Copy-to-clipboard button with confirmation state",
        files: &[
            ManifestFile::variant("CopyButton.tsx", "components/copy-button/CopyButton.tsx", Typed),
            ManifestFile::variant(
                "CopyButton.jsx",
                "components/copy-button/CopyButton.jsx",
                Untyped,
            ),
        ],
        dependencies: &["lucide-react"],
        dev_dependencies: &[],
        requires_tailwind: true,
        category: None,
        export_name: "CopyButton",
        entry: "CopyButton",
    },
];
