//! `$metadata` and `$book_metadata` root fragments (§4.G).

use crate::content::{BuildConfig, ContentModel};
use crate::error::Diagnostics;
use crate::fragment::Fragment;
use crate::value::{Struct, Value};

pub const FTYPE_METADATA: u64 = 258;
pub const FTYPE_BOOK_METADATA: u64 = 599;

const SYM_TITLE: u64 = 606;
const SYM_AUTHOR: u64 = 607;
const SYM_CREATOR: u64 = 608;
const SYM_LANGUAGE: u64 = 10;
const SYM_PUBLISHER: u64 = 609;
const SYM_ISBN: u64 = 610;

/// Builds `$metadata`, transliterating and expanding `title`/`creator`
/// when the config asks for it. `transliterate` (Cyrillic→Latin, §6,
/// SPEC_FULL A.3) runs before template expansion so a template like
/// `"{title} (Annotated)"` only ever sees Latin text. Expansion failures
/// fall back to the raw value and push a recoverable diagnostic (§4.G,
/// §7 `TemplateExpansionFailed`).
pub fn build_metadata(content: &ContentModel, config: &BuildConfig, diagnostics: &mut Diagnostics) -> Fragment {
    let raw_title = maybe_transliterate(&content.title, config.transliterate);
    let authors_joined = content.author_parts.join(" ");
    let raw_creator = maybe_transliterate(&authors_joined, config.transliterate);

    let title = expand_or_fallback(config.title_template.as_deref(), "title", &raw_title, diagnostics);
    let creator = expand_or_fallback(
        config.creator_name_template.as_deref(),
        "author",
        &raw_creator,
        diagnostics,
    );

    let mut value = Struct::new()
        .set(SYM_TITLE, Value::String(title))
        .set(SYM_CREATOR, Value::String(creator))
        .set(SYM_LANGUAGE, Value::String(content.language.clone()));
    if let Some(publisher) = &content.publisher {
        value = value.set(SYM_PUBLISHER, Value::String(publisher.clone()));
    }
    if let Some(isbn) = &content.isbn {
        value = value.set(SYM_ISBN, Value::String(isbn.clone()));
    }
    Fragment::singleton(FTYPE_METADATA, Value::Struct(value))
}

/// Builds `$book_metadata`: the author list and title, untouched by
/// template expansion (that's `$metadata`'s job).
pub fn build_book_metadata(content: &ContentModel) -> Fragment {
    let authors = Value::List(content.author_parts.iter().cloned().map(Value::String).collect());
    let value = Struct::new()
        .set(SYM_AUTHOR, authors)
        .set(SYM_TITLE, Value::String(content.title.clone()));
    Fragment::singleton(FTYPE_BOOK_METADATA, Value::Struct(value))
}

fn expand_or_fallback(template: Option<&str>, placeholder: &str, raw: &str, diagnostics: &mut Diagnostics) -> String {
    let Some(template) = template else {
        return raw.to_string();
    };
    match expand_template(template, placeholder, raw) {
        Some(expanded) => expanded,
        None => {
            diagnostics.warn(format!(
                "template expansion failed for '{template}', falling back to raw value"
            ));
            raw.to_string()
        }
    }
}

fn expand_template(template: &str, placeholder: &str, raw: &str) -> Option<String> {
    let needle = format!("{{{placeholder}}}");
    if !template.contains(&needle) {
        return None;
    }
    Some(template.replace(&needle, raw))
}

fn maybe_transliterate(s: &str, enabled: bool) -> String {
    if enabled {
        transliterate(s)
    } else {
        s.to_string()
    }
}

/// Scholarly Cyrillic→Latin transliteration (§6 `Transliterate`). Hard
/// and soft signs drop rather than transliterate; everything outside the
/// Cyrillic alphabet passes through unchanged.
fn transliterate(s: &str) -> String {
    s.chars().map(transliterate_char).collect()
}

fn transliterate_char(ch: char) -> String {
    match ch {
        'а' => "a".to_string(),
        'б' => "b".to_string(),
        'в' => "v".to_string(),
        'г' => "g".to_string(),
        'д' => "d".to_string(),
        'е' => "e".to_string(),
        'ё' => "yo".to_string(),
        'ж' => "zh".to_string(),
        'з' => "z".to_string(),
        'и' => "i".to_string(),
        'й' => "y".to_string(),
        'к' => "k".to_string(),
        'л' => "l".to_string(),
        'м' => "m".to_string(),
        'н' => "n".to_string(),
        'о' => "o".to_string(),
        'п' => "p".to_string(),
        'р' => "r".to_string(),
        'с' => "s".to_string(),
        'т' => "t".to_string(),
        'у' => "u".to_string(),
        'ф' => "f".to_string(),
        'х' => "kh".to_string(),
        'ц' => "ts".to_string(),
        'ч' => "ch".to_string(),
        'ш' => "sh".to_string(),
        'щ' => "shch".to_string(),
        'ъ' => String::new(),
        'ы' => "y".to_string(),
        'ь' => String::new(),
        'э' => "e".to_string(),
        'ю' => "yu".to_string(),
        'я' => "ya".to_string(),
        'А' => "A".to_string(),
        'Б' => "B".to_string(),
        'В' => "V".to_string(),
        'Г' => "G".to_string(),
        'Д' => "D".to_string(),
        'Е' => "E".to_string(),
        'Ё' => "Yo".to_string(),
        'Ж' => "Zh".to_string(),
        'З' => "Z".to_string(),
        'И' => "I".to_string(),
        'Й' => "Y".to_string(),
        'К' => "K".to_string(),
        'Л' => "L".to_string(),
        'М' => "M".to_string(),
        'Н' => "N".to_string(),
        'О' => "O".to_string(),
        'П' => "P".to_string(),
        'Р' => "R".to_string(),
        'С' => "S".to_string(),
        'Т' => "T".to_string(),
        'У' => "U".to_string(),
        'Ф' => "F".to_string(),
        'Х' => "Kh".to_string(),
        'Ц' => "Ts".to_string(),
        'Ч' => "Ch".to_string(),
        'Ш' => "Sh".to_string(),
        'Щ' => "Shch".to_string(),
        'Ъ' => String::new(),
        'Ы' => "Y".to_string(),
        'Ь' => String::new(),
        'Э' => "E".to_string(),
        'Ю' => "Yu".to_string(),
        'Я' => "Ya".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> ContentModel {
        ContentModel {
            title: "Eugene Onegin".to_string(),
            author_parts: vec!["Alexander".to_string(), "Pushkin".to_string()],
            language: "ru".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn metadata_without_templates_uses_raw_values() {
        let mut diags = Diagnostics::new();
        let fragment = build_metadata(&content(), &BuildConfig::default(), &mut diags);
        let value = fragment.value.as_struct().unwrap();
        assert_eq!(value.get(SYM_TITLE), Some(&Value::String("Eugene Onegin".to_string())));
        assert!(diags.is_empty());
    }

    #[test]
    fn metadata_expands_title_template() {
        let mut diags = Diagnostics::new();
        let config = BuildConfig {
            title_template: Some("{title} (Annotated)".to_string()),
            ..Default::default()
        };
        let fragment = build_metadata(&content(), &config, &mut diags);
        let value = fragment.value.as_struct().unwrap();
        assert_eq!(
            value.get(SYM_TITLE),
            Some(&Value::String("Eugene Onegin (Annotated)".to_string()))
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn metadata_falls_back_on_expansion_failure() {
        let mut diags = Diagnostics::new();
        let config = BuildConfig {
            title_template: Some("missing placeholder".to_string()),
            ..Default::default()
        };
        let fragment = build_metadata(&content(), &config, &mut diags);
        let value = fragment.value.as_struct().unwrap();
        assert_eq!(value.get(SYM_TITLE), Some(&Value::String("Eugene Onegin".to_string())));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn metadata_is_a_singleton_root_fragment() {
        let mut diags = Diagnostics::new();
        let fragment = build_metadata(&content(), &BuildConfig::default(), &mut diags);
        assert!(fragment.is_root());
    }

    fn cyrillic_content() -> ContentModel {
        ContentModel {
            title: "Капитанская дочка".to_string(),
            author_parts: vec!["Александр".to_string(), "Пушкин".to_string()],
            language: "ru".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn transliterate_disabled_leaves_cyrillic_untouched() {
        let mut diags = Diagnostics::new();
        let fragment = build_metadata(&cyrillic_content(), &BuildConfig::default(), &mut diags);
        let value = fragment.value.as_struct().unwrap();
        assert_eq!(
            value.get(SYM_TITLE),
            Some(&Value::String("Капитанская дочка".to_string()))
        );
    }

    #[test]
    fn transliterate_enabled_renders_title_and_creator_as_latin() {
        let mut diags = Diagnostics::new();
        let config = BuildConfig {
            transliterate: true,
            ..Default::default()
        };
        let fragment = build_metadata(&cyrillic_content(), &config, &mut diags);
        let value = fragment.value.as_struct().unwrap();
        assert_eq!(
            value.get(SYM_TITLE),
            Some(&Value::String("Kapitanskaya dochka".to_string()))
        );
        assert_eq!(
            value.get(SYM_CREATOR),
            Some(&Value::String("Aleksandr Pushkin".to_string()))
        );
    }

    #[test]
    fn transliterate_runs_before_template_expansion() {
        let mut diags = Diagnostics::new();
        let config = BuildConfig {
            transliterate: true,
            title_template: Some("{title} (Annotated)".to_string()),
            ..Default::default()
        };
        let fragment = build_metadata(&cyrillic_content(), &config, &mut diags);
        let value = fragment.value.as_struct().unwrap();
        assert_eq!(
            value.get(SYM_TITLE),
            Some(&Value::String("Kapitanskaya dochka (Annotated)".to_string()))
        );
        assert!(diags.is_empty());
    }
}
