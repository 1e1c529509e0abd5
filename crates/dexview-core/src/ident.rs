//! Identifier extraction from upstream resource URLs.
//!
//! List entries, species references and evolution nodes only carry a URL of
//! the form `.../resource/{id}/`. The identifier is the last path segment,
//! with or without a trailing slash.

/// Return the trailing identifier of a resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` and `https://pokeapi.co/api/v2/pokemon/25`
/// both yield `"25"`. Returns an empty string when there is no segment to
/// take, which only happens for malformed input.
pub fn id_from_url(url: &str) -> String {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    trimmed.rsplit('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trailing_slash_is_optional() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), "25");
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25"), "25");
    }

    #[test]
    fn string_ids_are_kept() {
        assert_eq!(
            id_from_url("https://pokeapi.co/api/v2/pokemon/mr-mime/"),
            "mr-mime"
        );
    }

    #[test]
    fn empty_input_yields_empty_id() {
        assert_eq!(id_from_url(""), "");
        assert_eq!(id_from_url("/"), "");
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon//"), "");
    }

    proptest! {
        #[test]
        fn same_id_with_or_without_slash(id in "[a-z0-9][a-z0-9-]{0,15}") {
            let with = format!("https://pokeapi.co/api/v2/pokemon/{id}/");
            let without = format!("https://pokeapi.co/api/v2/pokemon/{id}");
            prop_assert_eq!(id_from_url(&with), id.clone());
            prop_assert_eq!(id_from_url(&without), id);
        }
    }
}
