//! Minimal English inflection for element naming
//!
//! Only singularization is needed: the children of a plural-keyed
//! collection element are addressed in the singular. The rules cover the
//! common regular forms; irregular nouns pass through unchanged.

/// Return the singular form of `word`, or the word unchanged when no rule
/// applies.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }

    if let Some(stem) = word.strip_suffix("lves") {
        return format!("{stem}lf");
    }

    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            // keep the consonant, drop the trailing "es"
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }

    if word.ends_with("ss") {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('s') {
        if !stem.is_empty() {
            return stem.to_string();
        }
    }

    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(singularize("models"), "model");
        assert_eq!(singularize("collections"), "collection");
        assert_eq!(singularize("entries"), "entry");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("branches"), "branch");
        assert_eq!(singularize("wolves"), "wolf");
        assert_eq!(singularize("waves"), "wave");
    }

    #[test]
    fn test_non_plurals_pass_through() {
        assert_eq!(singularize("testing"), "testing");
        assert_eq!(singularize("nested"), "nested");
        assert_eq!(singularize("array"), "array");
        assert_eq!(singularize("s"), "s");
        assert_eq!(singularize(""), "");
    }
}
