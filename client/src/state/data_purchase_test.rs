use super::*;

#[test]
fn default_draft_is_not_ready() {
    assert!(!DataPurchaseDraft::default().is_ready());
}

#[test]
fn complete_draft_is_ready() {
    let mut draft = DataPurchaseDraft::default();
    draft.select_network("mtn-data");
    draft.variation_code = Some("mtn-10mb-100".to_owned());
    draft.phone = "08011111111".to_owned();
    assert!(draft.is_ready());
}

#[test]
fn switching_network_clears_plan() {
    let mut draft = DataPurchaseDraft::default();
    draft.select_network("mtn-data");
    draft.variation_code = Some("mtn-10mb-100".to_owned());
    draft.select_network("glo-data");
    assert_eq!(draft.service_id, "glo-data");
    assert_eq!(draft.variation_code, None);
}

#[test]
fn reselecting_same_network_keeps_plan() {
    let mut draft = DataPurchaseDraft::default();
    draft.select_network("mtn-data");
    draft.variation_code = Some("mtn-10mb-100".to_owned());
    draft.select_network("mtn-data");
    assert_eq!(draft.variation_code.as_deref(), Some("mtn-10mb-100"));
}

#[test]
fn blank_phone_is_not_ready() {
    let mut draft = DataPurchaseDraft::default();
    draft.select_network("mtn-data");
    draft.variation_code = Some("mtn-10mb-100".to_owned());
    draft.phone = "   ".to_owned();
    assert!(!draft.is_ready());
}
