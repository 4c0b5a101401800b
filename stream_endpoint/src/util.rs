use indexmap::IndexMap;

/// Join query parameters as `key1=value1&key2=value2`, in iteration order.
///
/// Keys and values are written verbatim: nothing is percent-encoded, so a
/// value holding `&` or `=` will split into extra pairs on the server side.
/// An empty map yields an empty string.
pub fn format_query(params: &IndexMap<String, String>) -> String {
    let mut out = String::new();
    for (k, v) in params {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(k);
        out.push('=');
        out.push_str(v);
    }
    out
}

/// Append `query` to `path` behind a `?`, or return `path` alone when the
/// query is empty.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Glue a base URL and a path together with exactly one `/` between them.
pub fn build_url(base: &str, path: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    url.push('/');
    url.push_str(path.trim_start_matches('/'));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_query_keeps_insertion_order() {
        let mut params = IndexMap::new();
        params.insert("b".to_string(), "2".to_string());
        params.insert("a".to_string(), "1".to_string());
        assert_eq!(format_query(&params), "b=2&a=1");
    }

    #[test]
    fn test_format_query_empty() {
        assert_eq!(format_query(&IndexMap::new()), "");
    }

    #[test]
    fn test_format_query_does_not_escape() {
        let mut params = IndexMap::new();
        params.insert("rule".to_string(), "a b&c=d".to_string());
        assert_eq!(format_query(&params), "rule=a b&c=d");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/p", ""), "/p");
        assert_eq!(with_query("/p", "a=1"), "/p?a=1");
    }

    #[test]
    fn test_build_url_single_slash() {
        assert_eq!(build_url("https://h/", "/x/y"), "https://h/x/y");
        assert_eq!(build_url("https://h", "x"), "https://h/x");
    }
}
