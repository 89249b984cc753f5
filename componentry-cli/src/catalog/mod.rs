//! Static catalog of installable components and templates
//!
//! Every item the CLI can install is described by a [`Manifest`]: the files to
//! fetch from the registry, the npm packages it needs and whether its markup
//! assumes Tailwind CSS. The tables live in [`components`] and [`templates`]
//! and are compiled into the binary.

pub mod components;
pub mod templates;

use crate::{ItemKind, OutputFormat};

/// One file belonging to a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestFile {
    /// File name written under `{target_dir}/{item}/`
    pub name: &'static str,
    /// Path of the file relative to the registry base URL
    pub source: &'static str,
    /// Source variant this file belongs to; `None` means it is always written
    pub format: Option<OutputFormat>,
}

impl ManifestFile {
    /// File shipped for a single source variant
    #[must_use]
    pub const fn variant(name: &'static str, source: &'static str, format: OutputFormat) -> Self {
        Self {
            name,
            source,
            format: Some(format),
        }
    }

    /// File shipped for every source variant (stylesheets, assets)
    #[must_use]
    pub const fn shared(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            source,
            format: None,
        }
    }

    /// Whether this file is written for the requested format
    #[must_use]
    pub fn applies_to(&self, format: OutputFormat) -> bool {
        self.format.is_none_or(|tag| tag == format)
    }
}

/// Everything needed to install one catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manifest {
    /// Catalog key, also the directory created under the target directory
    pub name: &'static str,
    /// Component or template
    pub kind: ItemKind,
    /// One-line summary shown by `componentry list`
    pub description: &'static str,
    /// Files to fetch, in install order
    pub files: &'static [ManifestFile],
    /// Runtime npm packages
    pub dependencies: &'static [&'static str],
    /// Development npm packages
    pub dev_dependencies: &'static [&'static str],
    /// Markup relies on Tailwind CSS being configured
    pub requires_tailwind: bool,
    /// Grouping label (templates only)
    pub category: Option<&'static str>,
    /// Symbol re-exported from the barrel file
    pub export_name: &'static str,
    /// File stem of the module holding the default export
    pub entry: &'static str,
}

impl Manifest {
    /// Files to write for the requested format, in manifest order
    pub fn files_for(&self, format: OutputFormat) -> impl Iterator<Item = &ManifestFile> + '_ {
        self.files.iter().filter(move |file| file.applies_to(format))
    }

    /// Module path of the entry file relative to the barrel file
    ///
    /// Plain JavaScript output keeps the file extension so the path resolves
    /// under native ES module loaders.
    #[must_use]
    pub fn module_path(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Typed => format!("./{}/{}", self.name, self.entry),
            OutputFormat::Untyped => format!(
                "./{}/{}.{}",
                self.name,
                self.entry,
                format.source_extension()
            ),
        }
    }
}

/// Lookup table over the component and template manifests
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    components: &'static [Manifest],
    templates: &'static [Manifest],
}

impl Catalog {
    /// The catalog compiled into this binary
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            components: components::COMPONENTS,
            templates: templates::TEMPLATES,
        }
    }

    /// Find an item by kind and name
    #[must_use]
    pub fn lookup(&self, kind: ItemKind, name: &str) -> Option<&'static Manifest> {
        self.items(kind).iter().find(|manifest| manifest.name == name)
    }

    /// All manifests of one kind, in catalog order
    #[must_use]
    pub const fn items(&self, kind: ItemKind) -> &'static [Manifest] {
        match kind {
            ItemKind::Component => self.components,
            ItemKind::Template => self.templates,
        }
    }

    /// Names of all manifests of one kind, in catalog order
    #[must_use]
    pub fn names(&self, kind: ItemKind) -> Vec<&'static str> {
        self.items(kind).iter().map(|manifest| manifest.name).collect()
    }

    /// Distinct template categories, in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for category in self.templates.iter().filter_map(|manifest| manifest.category) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_item_has_files() {
        let catalog = Catalog::builtin();
        for kind in ItemKind::ALL {
            for manifest in catalog.items(kind) {
                assert!(!manifest.files.is_empty(), "{} has no files", manifest.name);
                for format in OutputFormat::ALL {
                    assert!(
                        manifest.files_for(format).count() > 0,
                        "{} has no {format} files",
                        manifest.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_file_names_unique_within_manifest() {
        let catalog = Catalog::builtin();
        for kind in ItemKind::ALL {
            for manifest in catalog.items(kind) {
                let names: HashSet<_> = manifest.files.iter().map(|file| file.name).collect();
                assert_eq!(names.len(), manifest.files.len(), "{}", manifest.name);
            }
        }
    }

    #[test]
    fn test_dev_dependencies_apply_to_both_formats() {
        let catalog = Catalog::builtin();
        for kind in ItemKind::ALL {
            for manifest in catalog.items(kind) {
                assert!(
                    manifest
                        .dev_dependencies
                        .iter()
                        .all(|package| !package.starts_with("@types/")),
                    "{} declares a type-only dev dependency",
                    manifest.name
                );
            }
        }
    }

    #[test]
    fn test_item_names_unique_and_kinds_match() {
        let catalog = Catalog::builtin();
        for kind in ItemKind::ALL {
            let names: HashSet<_> = catalog.names(kind).into_iter().collect();
            assert_eq!(names.len(), catalog.items(kind).len());
            assert!(catalog.items(kind).iter().all(|manifest| manifest.kind == kind));
        }
    }

    #[test]
    fn test_only_templates_have_categories() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .items(ItemKind::Component)
            .iter()
            .all(|manifest| manifest.category.is_none()));
        assert!(catalog
            .items(ItemKind::Template)
            .iter()
            .all(|manifest| manifest.category.is_some()));
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let catalog = Catalog::builtin();
        let button = catalog.lookup(ItemKind::Component, "button").unwrap();
        assert_eq!(button.export_name, "Button");
        assert!(button.requires_tailwind);

        assert!(catalog.lookup(ItemKind::Component, "carousel").is_none());
        assert!(catalog.lookup(ItemKind::Template, "button").is_none());
        assert!(catalog.lookup(ItemKind::Component, "Button").is_none());
    }

    #[test]
    fn test_button_files_per_format() {
        let button = Catalog::builtin()
            .lookup(ItemKind::Component, "button")
            .unwrap();

        let typed: Vec<_> = button.files_for(OutputFormat::Typed).map(|f| f.name).collect();
        assert_eq!(typed, vec!["Button.tsx", "button-animations.css"]);

        let untyped: Vec<_> = button.files_for(OutputFormat::Untyped).map(|f| f.name).collect();
        assert_eq!(untyped, vec!["Button.jsx", "button-animations.css"]);
    }

    #[test]
    fn test_module_path() {
        let button = Catalog::builtin()
            .lookup(ItemKind::Component, "button")
            .unwrap();
        assert_eq!(button.module_path(OutputFormat::Typed), "./button/Button");
        assert_eq!(button.module_path(OutputFormat::Untyped), "./button/Button.jsx");
    }

    #[test]
    fn test_categories_are_distinct() {
        let categories = Catalog::builtin().categories();
        let unique: HashSet<_> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        assert!(categories.contains(&"error-pages"));
    }

    fn any_format() -> impl Strategy<Value = Option<OutputFormat>> {
        prop_oneof![
            Just(None),
            Just(Some(OutputFormat::Typed)),
            Just(Some(OutputFormat::Untyped)),
        ]
    }

    proptest! {
        #[test]
        fn format_filter_is_exhaustive_and_exclusive(
            tags in proptest::collection::vec(any_format(), 0..12),
            typed in any::<bool>(),
        ) {
            let requested = if typed { OutputFormat::Typed } else { OutputFormat::Untyped };
            let files: Vec<ManifestFile> = tags
                .iter()
                .map(|tag| ManifestFile { name: "f", source: "s", format: *tag })
                .collect();

            let kept: Vec<_> = files.iter().filter(|file| file.applies_to(requested)).collect();

            let expected = tags
                .iter()
                .filter(|tag| tag.is_none() || **tag == Some(requested))
                .count();
            prop_assert_eq!(kept.len(), expected);
            prop_assert!(kept
                .iter()
                .all(|file| file.format.is_none() || file.format == Some(requested)));
        }
    }
}
