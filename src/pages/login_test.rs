use super::*;

#[test]
fn post_login_destination_honors_preserved_local_paths() {
    assert_eq!(post_login_destination(Some("/create".to_owned())), "/create");
    assert_eq!(post_login_destination(Some("/project-planning".to_owned())), "/project-planning");
}

#[test]
fn post_login_destination_defaults_to_home() {
    assert_eq!(post_login_destination(None), "/");
    assert_eq!(post_login_destination(Some(String::new())), "/");
}

#[test]
fn post_login_destination_rejects_external_targets() {
    assert_eq!(post_login_destination(Some("https://evil.example".to_owned())), "/");
    assert_eq!(post_login_destination(Some("//evil.example".to_owned())), "/");
}

#[test]
fn normalize_otp_input_keeps_at_most_six_digits() {
    assert_eq!(normalize_otp_input("123456"), "123456");
    assert_eq!(normalize_otp_input("12a3-45 678"), "123456");
    assert_eq!(normalize_otp_input("abc"), "");
}

#[test]
fn validate_password_login_requires_both_fields() {
    assert_eq!(
        validate_password_login(" ada ", "hunter2"),
        Ok(("ada".to_owned(), "hunter2".to_owned()))
    );
    assert_eq!(validate_password_login("", "hunter2"), Err("Please fill in both fields."));
    assert_eq!(validate_password_login("ada", ""), Err("Please fill in both fields."));
}

#[test]
fn validate_otp_request_requires_identifier() {
    assert_eq!(validate_otp_request(" a@b.com "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_otp_request("   "), Err("Please enter your email or username"));
}

#[test]
fn validate_otp_login_requires_six_digit_code() {
    assert_eq!(
        validate_otp_login("a@b.com", "123456"),
        Ok(("a@b.com".to_owned(), "123456".to_owned()))
    );
    assert_eq!(validate_otp_login("", "123456"), Err("Please fill all fields"));
    assert_eq!(validate_otp_login("a@b.com", ""), Err("Please fill all fields"));
    assert_eq!(validate_otp_login("a@b.com", "12345"), Err("Please enter a valid 6-digit OTP"));
    assert_eq!(validate_otp_login("a@b.com", "12345a"), Err("Please enter a valid 6-digit OTP"));
}
