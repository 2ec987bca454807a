//! Implementation artifact: the definition of the nested resource constant.

use crate::types::SectionRegistry;

use super::{CodeBuilder, GENERATED_FILE_BANNER};

/// Renders the definition artifact.
///
/// One aggregate literal per section, one `.key = @"value"` assignment per
/// entry. Values are emitted verbatim; callers are trusted not to embed
/// unescaped quotes.
pub(crate) fn render(constant_name: &str, registry: &SectionRegistry) -> String {
    let mut file = CodeBuilder::new();
    file.raw(GENERATED_FILE_BANNER);
    file.line("");

    file.line(&format!(
        "const struct {} {} = {{",
        constant_name, constant_name
    ));
    file.indented(|outer| {
        for (section_name, section) in registry.iter() {
            outer.line(&format!(".{} = {{", section_name));
            outer.indented(|fields| {
                for (key, entry) in section.iter() {
                    fields.line(&format!(".{} = @\"{}\",", key, entry.value));
                }
            });
            outer.line("},");
        }
    });
    file.line("};");

    file.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResourceEntry, Section};
    use indoc::indoc;

    fn registry_with_icons() -> SectionRegistry {
        let mut section = Section::new();
        section.insert(
            "playButton".to_string(),
            ResourceEntry {
                value: "play.png".to_string(),
                comment: None,
            },
        );
        section.insert(
            "pauseButton".to_string(),
            ResourceEntry {
                value: "pause.png".to_string(),
                comment: Some("Pause icon".to_string()),
            },
        );

        let mut registry = SectionRegistry::new();
        registry.insert("icons".to_string(), section);
        registry
    }

    #[test]
    fn test_render() {
        let rendered = render("Resources", &registry_with_icons());
        let expected = indoc! {r#"
            // This file is automatically generated by xcresgen.
            // Do not edit it manually, as your changes will be overwritten.

            const struct Resources Resources = {
                .icons = {
                    .pauseButton = @"pause.png",
                    .playButton = @"play.png",
                },
            };
        "#};
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_emits_values_verbatim() {
        let mut section = Section::new();
        section.insert(
            "tricky".to_string(),
            ResourceEntry {
                value: r#"a "quoted" value"#.to_string(),
                comment: None,
            },
        );
        let mut registry = SectionRegistry::new();
        registry.insert("strings".to_string(), section);

        let rendered = render("R", &registry);
        assert!(rendered.contains(r#".tricky = @"a "quoted" value","#));
    }

    #[test]
    fn test_render_empty_registry() {
        let rendered = render("R", &SectionRegistry::new());
        assert!(rendered.contains("const struct R R = {\n};\n"));
    }
}
