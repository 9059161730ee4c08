use boolang_macro::boolang;

#[test]
fn test_print_literal() {
    #[boolang]
    fn _test_print_literal() -> Vec<bool> {
        r#"
        print true
        "#
    }

    assert_eq!(_test_print_literal(), vec![true]);
}

#[test]
fn test_assign_and_print() {
    #[boolang]
    fn _test_assign_and_print() -> Vec<bool> {
        r#"
        x = t
        y = not x or f
        print x
        print y
        print x and not y
        "#
    }

    assert_eq!(_test_assign_and_print(), vec![true, false, true]);
}

#[test]
fn test_no_prints() {
    #[boolang]
    fn _test_no_prints() -> Vec<bool> {
        r#"
        x = 1
        "#
    }

    assert!(_test_no_prints().is_empty());
}

#[test]
fn test_precedence() {
    #[boolang]
    fn _test_precedence() -> Vec<bool> {
        r#"
        print not true and false or true
        print not (true and false or true)
        "#
    }

    assert_eq!(_test_precedence(), vec![true, false]);
}

#[test]
fn test_visibility_is_kept() {
    mod inner {
        use boolang_macro::boolang;

        #[boolang]
        pub fn program() -> Vec<bool> {
            r#"print F"#
        }
    }

    assert_eq!(inner::program(), vec![false]);
}
