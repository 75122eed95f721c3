use super::*;

#[test]
fn escape_html_neutralizes_script_tags() {
    assert_eq!(
        escape_html("<script>alert(1)</script>"),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
}

#[test]
fn escape_html_handles_quotes_and_ampersands() {
    assert_eq!(escape_html(r#"Ben & "Jerry's""#), "Ben &amp; &quot;Jerry&#39;s&quot;");
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Délice 🇹🇳"), "Délice 🇹🇳");
}
