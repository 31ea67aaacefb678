// crates/lfconv-core/src/eol/name.rs
//
// Filter name layout: `<prefix-path>.<to>[:<from>]`.
// Only the final dot-segment is read here; the prefix belongs to whoever
// routed the name to us.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameTokens<'a> {
    pub to: &'a str,
    /// `None` when the name carries no `:from` part.
    pub from: Option<&'a str>,
}

pub fn split_filter_name(name: &str) -> NameTokens<'_> {
    // rsplit always yields at least one item, even for "".
    let last = name.rsplit('.').next().unwrap_or(name);
    match last.split_once(':') {
        Some((to, from)) => NameTokens { to, from: Some(from) },
        None => NameTokens { to: last, from: None },
    }
}
