//! Integration tests for the wire model contract.
//!
//! Covers the behaviors every model type shares: structural equality and
//! hash consistency, fluent construction, absence omission in rendering,
//! sequence accumulation, the checked mapping insert, enum literal handling,
//! and the JSON wire shape.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use a4b_model::{
    BusinessReportFormat, CommsProtocol, ConferenceProviderType, CreateConferenceProviderRequest,
    CreateRoomRequest, Filter, IpDialIn, MeetingSetting, ModelError, PstnDialIn, RequirePin,
    SearchRoomsRequest, SkillDetails, Sort, SortValue, Tag, WakeWord,
    new_client_request_token,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

const PROFILE_ARN: &str = "arn:aws:a4b:us-east-1:111122223333:profile/abc";

#[test]
fn replayed_construction_is_equal_and_hashes_equal() {
    let first = CreateRoomRequest::new()
        .with_room_name("Room 12")
        .with_profile_arn(PROFILE_ARN)
        .with_tag(Tag::new("floor", "3"));
    let second = CreateRoomRequest::new()
        .with_room_name("Room 12")
        .with_profile_arn(PROFILE_ARN)
        .with_tag(Tag::new("floor", "3"));

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn fluent_and_field_assignment_build_equal_values() {
    let fluent = CreateRoomRequest::new()
        .with_room_name("Room 12")
        .with_profile_arn(PROFILE_ARN);

    let mut imperative = CreateRoomRequest::new();
    imperative.room_name = Some("Room 12".to_string());
    imperative.profile_arn = Some(PROFILE_ARN.to_string());

    assert_eq!(fluent, imperative);
    assert_eq!(hash_of(&fluent), hash_of(&imperative));
}

#[test]
fn absent_fields_are_omitted_from_rendering_in_declaration_order() {
    let request = CreateRoomRequest::new()
        .with_room_name("Room 12")
        .with_profile_arn(PROFILE_ARN);
    assert_eq!(
        request.to_string(),
        format!("{{RoomName: Room 12,ProfileArn: {PROFILE_ARN}}}")
    );

    // An instance differing only by an absent field is not equal.
    let without_profile = CreateRoomRequest::new().with_room_name("Room 12");
    assert_ne!(request, without_profile);
    assert_eq!(without_profile.to_string(), "{RoomName: Room 12}");

    assert_eq!(CreateRoomRequest::new().to_string(), "{}");
}

#[test]
fn sequence_with_appends_and_assignment_replaces() {
    let accumulated = SearchRoomsRequest::new()
        .with_filter(Filter::new("RoomName").with_value("a"))
        .with_filter(Filter::new("RoomName").with_value("b"))
        .with_sort_criterion(Sort::new("RoomName", SortValue::Asc));
    assert_eq!(accumulated.filters.as_ref().unwrap().len(), 2);

    // Assigning the field wholesale replaces the accumulated sequence.
    let mut replaced = accumulated.clone();
    replaced.filters = Some(vec![Filter::new("ProfileName").with_value("c")]);
    assert_eq!(replaced.filters.as_ref().unwrap().len(), 1);
    assert_eq!(
        replaced.filters.as_ref().unwrap()[0].key.as_deref(),
        Some("ProfileName")
    );
}

#[test]
fn duplicate_review_key_is_rejected_and_map_is_unchanged() {
    let mut details = SkillDetails::default();
    details.add_reviews_entry("k", "v1").unwrap();

    let err = details.add_reviews_entry("k", "v2").unwrap_err();
    assert!(matches!(err, ModelError::DuplicateMapKey { field: "Reviews", .. }));
    assert_eq!(details.reviews.as_ref().unwrap()["k"], "v1");

    details.clear_reviews_entries();
    details.add_reviews_entry("k", "v2").unwrap();
    assert_eq!(details.reviews.as_ref().unwrap()["k"], "v2");
}

#[test]
fn enum_literals_agree_across_every_surface() {
    for wake_word in WakeWord::VALUES {
        let literal = wake_word.as_str();
        // Display, serde, and FromStr all speak the same literal.
        assert_eq!(wake_word.to_string(), literal);
        assert_eq!(
            serde_json::to_string(wake_word).unwrap(),
            format!("\"{literal}\"")
        );
        assert_eq!(literal.parse::<WakeWord>().unwrap(), *wake_word);
    }

    let err = "HAL".parse::<WakeWord>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "'HAL' is not a valid WakeWord"
    );
}

#[test]
fn request_json_mirrors_the_wire_shape() {
    let request = CreateConferenceProviderRequest::new()
        .with_conference_provider_name("chime-hq")
        .with_conference_provider_type(ConferenceProviderType::Chime)
        .with_ip_dial_in(IpDialIn::new("203.0.113.10", CommsProtocol::Sips))
        .with_pstn_dial_in(
            PstnDialIn::new()
                .with_country_code("1")
                .with_phone_number("2065550100"),
        )
        .with_meeting_setting(MeetingSetting::new(RequirePin::Yes));

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["ConferenceProviderName"], "chime-hq");
    assert_eq!(json["ConferenceProviderType"], "CHIME");
    assert_eq!(json["IPDialIn"]["Endpoint"], "203.0.113.10");
    assert_eq!(json["IPDialIn"]["CommsProtocol"], "SIPS");
    assert_eq!(json["PSTNDialIn"]["CountryCode"], "1");
    assert_eq!(json["MeetingSetting"]["RequirePin"], "YES");
    // Absent fields are omitted from the serialized form entirely.
    assert!(json.get("ClientRequestToken").is_none());
    assert!(json.get("Tags").is_none());

    let back: CreateConferenceProviderRequest =
        serde_json::from_value(json).unwrap();
    assert_eq!(back, request);
}

#[test]
fn reviews_map_round_trips_through_json() {
    let mut details = SkillDetails::default();
    details.add_reviews_entry("Great", "Five stars").unwrap();
    details.add_reviews_entry("Meh", "Two stars").unwrap();

    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json["Reviews"]["Great"], "Five stars");

    let back: SkillDetails = serde_json::from_value(json).unwrap();
    assert_eq!(back, details);
}

#[test]
fn report_format_literals_match_the_documented_set() {
    assert_eq!(BusinessReportFormat::Csv.as_str(), "CSV");
    assert_eq!(BusinessReportFormat::CsvZip.as_str(), "CSV_ZIP");
    assert!("PDF".parse::<BusinessReportFormat>().is_err());
}

#[test]
fn generated_client_request_tokens_fit_the_token_field() {
    let token = new_client_request_token();
    let request = CreateRoomRequest::new().with_client_request_token(token.clone());
    assert_eq!(request.client_request_token, Some(token));
}
