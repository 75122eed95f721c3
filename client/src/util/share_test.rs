use super::*;

#[test]
fn facebook_url_encodes_both_params() {
    assert_eq!(
        facebook_url("https://consumesafe.tn/?q=a b", "Boga & co"),
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fconsumesafe.tn%2F%3Fq%3Da%20b&quote=Boga%20%26%20co"
    );
}

#[test]
fn twitter_url_uses_intent_endpoint() {
    assert_eq!(
        twitter_url("https://x.tn", "hi"),
        "https://twitter.com/intent/tweet?url=https%3A%2F%2Fx.tn&text=hi"
    );
}

#[test]
fn whatsapp_url_encodes_unicode() {
    assert_eq!(whatsapp_url("é"), "https://wa.me/?text=%C3%A9");
}
