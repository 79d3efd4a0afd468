/// Fixed key to value table with a documented fallback.
///
/// Display themes in the store are free-text keys ("green", "Heart"). Unknown
/// or missing keys resolve to the fallback, never to nothing.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl LookupTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)], fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    pub fn resolve(&self, key: Option<&str>) -> &'static str {
        key.map(str::trim)
            .and_then(|key| {
                self.entries
                    .iter()
                    .find(|(candidate, _)| *candidate == key)
                    .map(|(_, value)| *value)
            })
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: LookupTable = LookupTable::new(&[("green", "emerald"), ("blue", "sky")], "slate");

    #[test]
    fn resolves_known_keys() {
        assert_eq!(COLORS.resolve(Some("green")), "emerald");
        assert_eq!(COLORS.resolve(Some(" blue ")), "sky");
    }

    #[test]
    fn unknown_or_missing_keys_fall_back() {
        assert_eq!(COLORS.resolve(Some("magenta")), "slate");
        assert_eq!(COLORS.resolve(None), "slate");
        assert_eq!(COLORS.fallback(), "slate");
    }
}
