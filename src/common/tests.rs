#[cfg(test)]
mod common_tests {
    use crate::common::common::parse_query;
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_query_repeated_keys() {
        let query = parse_query("xt=urn:btih:abc&tr=http%3A%2F%2Fa&tr=http%3A%2F%2Fb").unwrap();
        assert_eq!(query.get("xt").unwrap(), &vec!["urn:btih:abc".to_string()]);
        assert_eq!(query.get("tr").unwrap(), &vec!["http://a".to_string(), "http://b".to_string()]);
    }

    #[test]
    fn test_parse_query_plus_and_percent() {
        let query = parse_query("dn=Some+Linux%20ISO").unwrap();
        assert_eq!(query.get("dn").unwrap()[0], "Some Linux ISO");
    }

    #[test]
    fn test_parse_query_value_with_equals() {
        let query = parse_query("ws=http://host/?a=b").unwrap();
        assert_eq!(query.get("ws").unwrap()[0], "http://host/?a=b");
    }

    #[test]
    fn test_parse_query_lowercases_keys_and_skips_empty_items() {
        let query = parse_query("&&XT=1&flag").unwrap();
        assert_eq!(query.get("xt").unwrap()[0], "1");
        assert!(query.get("flag").unwrap().is_empty());
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_parse_query_empty_key() {
        assert!(parse_query("=value").is_err());
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(error.to_string(), "could not create config.toml file");
        assert_eq!(error.message(), "could not create config.toml file");
    }
}
