use super::*;

// =============================================================
// Decision
// =============================================================

#[test]
fn authenticated_navigation_is_allowed() {
    assert_eq!(decide(true, "/dashboard/inicio"), GuardDecision::Allow);
}

#[test]
fn unauthenticated_navigation_redirects_to_restricted() {
    assert_eq!(
        decide(false, "/dashboard/inicio"),
        GuardDecision::Redirect("/restricted?redirect=%2Fdashboard%2Finicio".to_owned())
    );
}

#[test]
fn nested_routes_use_the_same_decision() {
    assert_eq!(
        decide(false, "/dashboard/vehiculos"),
        GuardDecision::Redirect("/restricted?redirect=%2Fdashboard%2Fvehiculos".to_owned())
    );
    assert_eq!(decide(true, "/dashboard/vehiculos"), GuardDecision::Allow);
}

#[test]
fn empty_path_omits_the_redirect_parameter() {
    assert_eq!(
        decide(false, ""),
        GuardDecision::Redirect("/restricted".to_owned())
    );
}

// =============================================================
// Query value encoding
// =============================================================

#[test]
fn encoding_preserves_unreserved_characters() {
    assert_eq!(encode_query_value("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encoding_escapes_separators_and_spaces() {
    assert_eq!(
        encode_query_value("/a b?c=d&e"),
        "%2Fa%20b%3Fc%3Dd%26e"
    );
}

#[test]
fn encoding_handles_multibyte_characters() {
    assert_eq!(encode_query_value("ñ"), "%C3%B1");
}
