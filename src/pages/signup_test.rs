use super::*;

#[test]
fn validate_signup_form_builds_trimmed_payload() {
    let payload = validate_signup_form(" Ada Lovelace ", " a@b.com ", "hunter2", " ada ").unwrap();
    assert_eq!(
        payload,
        SignupRequest {
            fullname: "Ada Lovelace".to_owned(),
            email: "a@b.com".to_owned(),
            password: "hunter2".to_owned(),
            username: "ada".to_owned(),
        }
    );
}

#[test]
fn validate_signup_form_requires_every_field() {
    assert_eq!(
        validate_signup_form("", "a@b.com", "hunter2", "ada"),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        validate_signup_form("Ada", "", "hunter2", "ada"),
        Err("Please fill in all fields.")
    );
    assert_eq!(validate_signup_form("Ada", "a@b.com", "", "ada"), Err("Please fill in all fields."));
    assert_eq!(
        validate_signup_form("Ada", "a@b.com", "hunter2", "   "),
        Err("Please fill in all fields.")
    );
}

#[test]
fn validate_signup_otp_accepts_exactly_six_digits() {
    assert_eq!(validate_signup_otp(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_signup_otp("12345"), Err("Please enter a valid 6-digit OTP"));
    assert_eq!(validate_signup_otp("1234567"), Err("Please enter a valid 6-digit OTP"));
    assert_eq!(validate_signup_otp("12345x"), Err("Please enter a valid 6-digit OTP"));
    assert_eq!(validate_signup_otp(""), Err("Please enter a valid 6-digit OTP"));
}
