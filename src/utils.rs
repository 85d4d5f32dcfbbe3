pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_exact() {
        assert_eq!(
            "2025-08-30".split_exact::<3>("-"),
            [Some("2025"), Some("08"), Some("30")]
        );
        assert_eq!("2025-08".split_exact::<3>("-"), [Some("2025"), Some("08"), None]);
        assert_eq!(
            "a-b-c-d".split_exact::<3>("-"),
            [Some("a"), Some("b"), Some("c-d")]
        );
    }
}
