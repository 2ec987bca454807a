//! Header artifact: the declaration of the nested resource constant.

use crate::types::SectionRegistry;

use super::{CodeBuilder, GENERATED_FILE_BANNER};

/// Renders the declaration artifact.
///
/// One nested `struct` per section, one `NSString *` field per key. With
/// `documented` set, each field is preceded by a `///` line carrying the
/// entry's comment, or its value when no comment was registered.
pub(crate) fn render(constant_name: &str, registry: &SectionRegistry, documented: bool) -> String {
    let mut file = CodeBuilder::new();
    file.raw(GENERATED_FILE_BANNER);
    file.line("");

    file.line(&format!("const struct {} {{", constant_name));
    file.indented(|outer| {
        for (section_name, section) in registry.iter() {
            outer.line(&format!("struct {} {{", section_name));
            outer.indented(|fields| {
                for (key, entry) in section.iter() {
                    if documented {
                        let doc = entry.comment.as_deref().unwrap_or(&entry.value);
                        fields.line(&format!("/// {}", doc));
                    }
                    fields.line(&format!("__unsafe_unretained NSString *{};", key));
                }
            });
            outer.line(&format!("}} {};", section_name));
        }
    });
    file.line(&format!("}} {};", constant_name));

    file.finish()
}
