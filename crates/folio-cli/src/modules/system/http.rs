use serde_json::Value;

pub(crate) fn print_payload(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Append the present parameters to a path as a query string. Values are
/// percent-encoded; names are fixed identifiers and stay as written.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut url = path.to_string();
    let mut separator = '?';
    for (name, value) in params {
        if let Some(value) = value {
            url.push(separator);
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_query_skips_absent_params() {
        assert_eq!(with_query("/projects", &[("featured", None)]), "/projects");
        assert_eq!(
            with_query(
                "/posts",
                &[
                    ("status", Some("published".to_string())),
                    ("tag", None),
                    ("limit", Some("10".to_string())),
                ]
            ),
            "/posts?status=published&limit=10"
        );
    }

    #[test]
    fn with_query_percent_encodes_values() {
        assert_eq!(
            with_query("/posts", &[("tag", Some("rust & async=fun".to_string()))]),
            "/posts?tag=rust%20%26%20async%3Dfun"
        );
    }
}
