// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Public name filtering.

/// Names without a leading underscore
pub fn public_names<'a, I>(names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| !name.starts_with('_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_names() {
        assert_eq!(
            public_names(["configure", "_private", "__dunder", "run_test"]),
            vec!["configure", "run_test"]
        );
    }

    #[test]
    fn test_empty_name_is_public() {
        assert_eq!(public_names([""]), vec![""]);
    }
}
