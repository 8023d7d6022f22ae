use bibrec_core::{
    template, validate_collection, validate_creator, validate_item, validate_search, CreatorInput,
    CreatorName, DiagnosticCode, FatalError, ItemType, Registry, ReportStatus, TagType,
    ValidationOptions, Validator,
};
use serde_json::{json, Value};

fn codes(report: &bibrec_core::ValidationReport) -> Vec<DiagnosticCode> {
    report.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn unknown_field_is_preserved_with_one_diagnostic() {
    let input = json!({"itemType": "book", "title": "Walden", "customField": "x"});
    let validated = validate_item(&input).unwrap();

    assert_eq!(codes(&validated.report), vec![DiagnosticCode::UnknownFieldPreserved]);
    assert_eq!(validated.report.status, ReportStatus::Drifted);
    assert_eq!(validated.record.preserved["customField"], json!("x"));

    let out = serde_json::to_value(&validated.record).unwrap();
    assert_eq!(out["customField"], json!("x"));
    assert_eq!(out["title"], json!("Walden"));
    assert_eq!(out["itemType"], json!("book"));
}

#[test]
fn illegal_creator_role_is_a_diagnostic_not_fatal() {
    let input = json!({
        "itemType": "journalArticle",
        "creators": [{"creatorType": "director", "firstName": "Agnès", "lastName": "Varda"}]
    });
    let validated = validate_item(&input).unwrap();

    assert_eq!(codes(&validated.report), vec![DiagnosticCode::InvalidCreatorType]);
    assert_eq!(validated.report.diagnostics[0].path, "creators[0].creatorType");
    assert_eq!(validated.record.creators.len(), 1);
    assert_eq!(validated.record.creators[0].creator_type, "director");
}

#[test]
fn missing_and_unknown_item_types_are_fatal() {
    assert_eq!(validate_item(&json!({"title": "x"})).unwrap_err(), FatalError::MissingItemType);
    assert_eq!(
        validate_item(&json!({"itemType": "scroll"})).unwrap_err(),
        FatalError::UnknownItemType("scroll".into())
    );
    assert_eq!(validate_item(&json!("book")).unwrap_err(), FatalError::NotAnObject);
}

#[test]
fn clean_record_round_trips() {
    let input = json!({
        "key": "ABCD2345",
        "version": 3,
        "itemType": "journalArticle",
        "title": "On Computable Numbers",
        "publicationTitle": "Proceedings of the London Mathematical Society",
        "date": "1936",
        "creators": [{"creatorType": "author", "firstName": "Alan", "lastName": "Turing"}],
        "tags": [{"tag": "computability"}, {"tag": "logic", "type": 1}],
        "collections": ["QWER2345"],
        "relations": {"dc:replaces": ["http://zotero.org/users/1/items/ZXCV2345"]},
        "dateAdded": "2024-01-01T00:00:00Z",
        "dateModified": "2024-01-02T00:00:00Z"
    });
    let validated = validate_item(&input).unwrap();
    assert!(validated.report.is_clean(), "{:?}", validated.report.diagnostics);

    let record = &validated.record;
    assert_eq!(record.key.as_ref().unwrap().as_str(), "ABCD2345");
    assert_eq!(record.version, Some(3));
    assert_eq!(record.date("date").unwrap().year(), Some(1936));
    assert_eq!(record.tags[1].kind(), TagType::Automatic);
    assert_eq!(record.title(), Some("On Computable Numbers"));
    assert_eq!(
        record.base_field_value("publicationTitle"),
        Some("Proceedings of the London Mathematical Society")
    );

    let out = serde_json::to_value(record).unwrap();
    assert_eq!(out, input);
}

#[test]
fn diagnostics_follow_field_declaration_order() {
    let input = json!({
        "itemType": "book",
        "zzz": 1,
        "date": "sometime",
        "title": 5,
        "creators": [{"creatorType": "author"}]
    });
    let validated = validate_item(&input).unwrap();
    assert_eq!(
        codes(&validated.report),
        vec![
            DiagnosticCode::InvalidFieldValue,
            DiagnosticCode::UnparseableDate,
            DiagnosticCode::EmptyCreatorName,
            DiagnosticCode::UnknownFieldPreserved,
        ]
    );
    assert_eq!(validated.report.status, ReportStatus::Degraded);
    assert_eq!(validated.record.preserved["title"], json!(5));
    assert_eq!(validated.record.field("date"), Some("sometime"));
    assert_eq!(validated.record.date("date").unwrap().literal.as_deref(), Some("sometime"));
    assert!(validated.record.creators.is_empty());
}

#[test]
fn date_strings_are_kept_verbatim_and_parsed_on_the_side() {
    let input = json!({"itemType": "book", "date": "circa 1923"});
    let validated = validate_item(&input).unwrap();
    assert!(validated.report.is_clean());
    assert_eq!(validated.record.field("date"), Some("circa 1923"));
    let parsed = validated.record.date("date").unwrap();
    assert!(parsed.circa);
    assert_eq!(parsed.year(), Some(1923));
}

#[test]
fn aliased_date_fields_are_parsed() {
    let input = json!({"itemType": "case", "caseName": "Marbury v. Madison", "dateDecided": "February 24, 1803"});
    let validated = validate_item(&input).unwrap();
    assert!(validated.report.is_clean());
    assert_eq!(validated.record.title(), Some("Marbury v. Madison"));
    assert_eq!(validated.record.date("dateDecided").unwrap().year(), Some(1803));
}

#[test]
fn number_fields_accept_json_numbers() {
    let input = json!({"itemType": "book", "numPages": 312});
    let validated = validate_item(&input).unwrap();
    assert!(validated.report.is_clean());
    assert_eq!(validated.record.field("numPages"), Some("312"));
}

#[test]
fn field_of_another_type_is_unknown_here() {
    let input = json!({"itemType": "book", "university": "MIT"});
    let validated = validate_item(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::UnknownFieldPreserved]);
    assert_eq!(validated.record.preserved["university"], json!("MIT"));
}

#[test]
fn creator_without_role_gets_primary_role() {
    let input = json!({"itemType": "film", "creators": [{"name": "Lumière Brothers"}]});
    let validated = validate_item(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::DefaultedCreatorType]);
    assert_eq!(validated.report.status, ReportStatus::Drifted);
    assert_eq!(validated.record.creators[0].creator_type, "director");

    let strict = Validator::new(ValidationOptions {
        default_creator_type: false,
        ..ValidationOptions::default()
    });
    let validated = strict.validate_item(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::MalformedCreator]);
    assert!(validated.record.creators.is_empty());
}

#[test]
fn ambiguous_creator_keeps_personal_name() {
    let input = json!({
        "itemType": "book",
        "creators": [{"creatorType": "author", "name": "ACME", "firstName": "Wile", "lastName": "Coyote"}]
    });
    let validated = validate_item(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::AmbiguousCreatorName]);
    assert_eq!(validated.record.creators[0].name, CreatorName::personal("Wile", "Coyote"));
}

#[test]
fn malformed_creators_are_dropped() {
    let input = json!({
        "itemType": "book",
        "creators": ["Mark Twain", {"creatorType": "author", "lastName": 7}, {"creatorType": "author", "name": "Twain"}]
    });
    let validated = validate_item(&input).unwrap();
    assert_eq!(
        codes(&validated.report),
        vec![DiagnosticCode::MalformedCreator, DiagnosticCode::MalformedCreator]
    );
    assert_eq!(validated.record.creators.len(), 1);
    assert_eq!(validated.record.creators[0].name, CreatorName::organizational("Twain"));
}

#[test]
fn wrong_kind_structural_field_is_preserved() {
    let input = json!({"itemType": "book", "creators": "Twain", "tags": {"a": 1}});
    let validated = validate_item(&input).unwrap();
    assert_eq!(validated.report.count(DiagnosticCode::InvalidFieldValue), 2);
    let out = serde_json::to_value(&validated.record).unwrap();
    assert_eq!(out["creators"], json!("Twain"));
    assert_eq!(out["tags"], json!({"a": 1}));
}

#[test]
fn tag_rules() {
    let input = json!({
        "itemType": "book",
        "tags": ["history", {"tag": "history"}, {"tag": "  "}, {"tag": "maps", "type": 4}]
    });
    let validated = validate_item(&input).unwrap();
    assert_eq!(
        codes(&validated.report),
        vec![
            DiagnosticCode::DuplicateRemoved,
            DiagnosticCode::EmptyTag,
            DiagnosticCode::InvalidTagType,
        ]
    );
    let tags: Vec<&str> = validated.record.tags.iter().map(|t| t.tag.as_str()).collect();
    assert_eq!(tags, vec!["history", "maps"]);
    assert_eq!(validated.record.tags[1].kind(), TagType::Manual);
}

#[test]
fn collection_and_parent_keys_are_checked() {
    let input = json!({
        "itemType": "note",
        "note": "<p>see also</p>",
        "parentItem": "not-a-key",
        "collections": ["ABCD2345", "ABCD2345", "lower123"]
    });
    let validated = validate_item(&input).unwrap();
    assert_eq!(
        codes(&validated.report),
        vec![
            DiagnosticCode::DuplicateRemoved,
            DiagnosticCode::InvalidCollectionKey,
            DiagnosticCode::InvalidParentItem,
        ]
    );
    assert_eq!(validated.record.collections, vec!["ABCD2345", "lower123"]);
    assert_eq!(validated.record.parent_item.as_deref(), Some("not-a-key"));
}

#[test]
fn relation_errors_drop_only_the_bad_predicate() {
    let input = json!({
        "itemType": "book",
        "relations": {
            "dc:relation": "http://zotero.org/users/1/items/ABCD2345",
            "owl:sameAs": []
        }
    });
    let validated = validate_item(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::EmptyRelationTarget]);
    assert_eq!(validated.report.diagnostics[0].path, "relations.owl:sameAs");
    assert_eq!(validated.record.relations.len(), 1);
}

#[test]
fn timestamps_are_checked_unless_disabled() {
    let input = json!({"itemType": "webpage", "accessDate": "last tuesday", "dateAdded": "2024-13-01"});
    let validated = validate_item(&input).unwrap();
    assert_eq!(validated.report.count(DiagnosticCode::InvalidTimestamp), 2);
    assert_eq!(validated.record.field("accessDate"), Some("last tuesday"));

    let lax = Validator::new(ValidationOptions {
        check_timestamps: false,
        ..ValidationOptions::default()
    });
    assert!(lax.validate_item(&input).unwrap().report.is_clean());
}

#[test]
fn unknown_field_reports_can_be_silenced() {
    let quiet = Validator::new(ValidationOptions {
        report_unknown_fields: false,
        ..ValidationOptions::default()
    });
    let validated = quiet.validate_item(&json!({"itemType": "book", "customField": "x"})).unwrap();
    assert!(validated.report.is_clean());
    assert_eq!(validated.record.preserved["customField"], json!("x"));
}

#[test]
fn enveloped_item_carries_transport_members() {
    let input = json!({
        "key": "ABCD2345",
        "version": 12,
        "library": {"type": "user", "id": 475425, "name": "someone"},
        "links": {"self": {"href": "https://api.zotero.org/users/475425/items/ABCD2345"}},
        "meta": {"numChildren": 0},
        "data": {"itemType": "book", "title": "Walden"}
    });
    let validated = validate_item(&input).unwrap();
    assert!(validated.report.is_clean());
    let record = validated.record;
    assert_eq!(record.version, Some(12));
    let envelope = record.envelope.unwrap();
    assert_eq!(envelope.meta.unwrap()["numChildren"], json!(0));
}

#[test]
fn disagreeing_envelope_is_fatal() {
    let input = json!({"key": "ABCD2345", "version": 2, "data": {"itemType": "book", "version": 3}});
    assert!(matches!(validate_item(&input), Err(FatalError::MalformedEnvelope(_))));
}

#[test]
fn payload_data_member_is_an_unknown_field() {
    let input = json!({"itemType": "book", "title": "Walden", "data": "x"});
    let validated = validate_item(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::UnknownFieldPreserved]);
    assert_eq!(validated.report.diagnostics[0].path, "data");
    assert_eq!(validated.record.preserved["data"], json!("x"));
    assert!(validated.record.envelope.is_none());

    let input = json!({"itemType": "book", "data": {"source": "import"}});
    let validated = validate_item(&input).unwrap();
    assert_eq!(validated.record.preserved["data"], json!({"source": "import"}));

    let input = json!({"name": "Reading", "data": {"source": "import"}});
    let validated = validate_collection(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::UnknownFieldPreserved]);
    assert_eq!(validated.record.name, "Reading");
}

#[test]
fn creator_validation_agrees_with_item_validation() {
    let entries = [
        json!({"creatorType": "author", "name": ""}),
        json!({"creatorType": "author", "name": "   ", "lastName": "\t"}),
        json!({"creatorType": "author", "name": "", "firstName": "Ada"}),
        json!({"creatorType": "author", "name": "  ", "firstName": " Ada ", "lastName": "Lovelace"}),
        json!({"creatorType": "author", "name": "ACME", "firstName": ""}),
    ];
    for entry in entries {
        let input: CreatorInput = serde_json::from_value(entry.clone()).unwrap();
        let direct = validate_creator(ItemType::Book, &input);
        let validated = validate_item(&json!({"itemType": "book", "creators": [entry.clone()]})).unwrap();
        match direct {
            Ok(creator) => {
                assert!(validated.report.is_clean(), "{entry}");
                assert_eq!(validated.record.creators, vec![creator], "{entry}");
            }
            Err(err) => {
                assert_eq!(codes(&validated.report), vec![err.code()], "{entry}");
                assert!(validated.record.creators.is_empty(), "{entry}");
            }
        }
    }
}

#[test]
fn creator_and_tag_extras_are_preserved_and_reported() {
    let input = json!({
        "itemType": "book",
        "creators": [{"creatorType": "author", "name": "ACME", "fieldMode": 1}],
        "tags": [{"tag": "maps", "type": 1, "colour": "red"}]
    });
    let validated = validate_item(&input).unwrap();
    assert_eq!(
        codes(&validated.report),
        vec![DiagnosticCode::UnknownFieldPreserved, DiagnosticCode::UnknownFieldPreserved]
    );
    let paths: Vec<&str> = validated.report.diagnostics.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["creators[0].fieldMode", "tags[0].colour"]);

    let out = serde_json::to_value(&validated.record).unwrap();
    assert_eq!(out["creators"][0], json!({"creatorType": "author", "name": "ACME", "fieldMode": 1}));
    assert_eq!(out["tags"][0], json!({"tag": "maps", "type": 1, "colour": "red"}));

    let quiet = Validator::new(ValidationOptions {
        report_unknown_fields: false,
        ..ValidationOptions::default()
    });
    let validated = quiet.validate_item(&input).unwrap();
    assert!(validated.report.is_clean());
    assert_eq!(validated.record.creators[0].extra["fieldMode"], json!(1));
}

#[test]
fn null_tag_type_means_manual() {
    let input = json!({"itemType": "book", "tags": [{"tag": "maps", "type": null}]});
    let validated = validate_item(&input).unwrap();
    assert!(validated.report.is_clean());
    assert_eq!(validated.record.tags[0].kind(), TagType::Manual);
    let out = serde_json::to_value(&validated.record).unwrap();
    assert_eq!(out["tags"][0], json!({"tag": "maps"}));
}

#[test]
fn templates_cover_every_item_type() {
    let registry = Registry::global();
    for item_type in ItemType::ALL {
        let record = template(item_type.as_str()).unwrap();
        assert_eq!(record.item_type, *item_type);
        assert_eq!(record.fields.len(), registry.fields(*item_type).len());
        for creator in &record.creators {
            assert!(
                registry
                    .creator_types(*item_type)
                    .iter()
                    .any(|role| role.creator_type == creator.creator_type),
                "{item_type}: {}",
                creator.creator_type
            );
        }
    }
    assert!(template("scroll").is_err());
}

#[test]
fn collection_validation() {
    let input = json!({"name": "Reading", "parentCollection": false, "relations": {}, "color": "red"});
    let validated = validate_collection(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::UnknownFieldPreserved]);
    let out = serde_json::to_value(&validated.record).unwrap();
    assert_eq!(out, json!({"name": "Reading", "parentCollection": false, "color": "red"}));

    let nameless = validate_collection(&json!({"parentCollection": "ABCD2345"})).unwrap();
    assert_eq!(codes(&nameless.report), vec![DiagnosticCode::MissingName]);
    assert_eq!(nameless.record.parent_collection.as_deref(), Some("ABCD2345"));
}

#[test]
fn search_validation() {
    let input = json!({
        "name": "Unread",
        "conditions": [
            {"condition": "tag", "operator": "isNot", "value": "read"},
            {"condition": "title", "operator": "contains"}
        ]
    });
    let validated = validate_search(&input).unwrap();
    assert_eq!(codes(&validated.report), vec![DiagnosticCode::InvalidSearchCondition]);
    assert_eq!(validated.report.diagnostics[0].path, "conditions[1]");
    assert_eq!(validated.record.conditions.len(), 1);
    assert_eq!(validated.record.conditions[0].operator, "isNot");
}

#[test]
fn reports_serialize_with_stable_codes() {
    let validated = validate_item(&json!({"itemType": "book", "customField": 1})).unwrap();
    let report: Value = serde_json::to_value(&validated.report).unwrap();
    assert_eq!(report["status"], json!("Drifted"));
    assert_eq!(report["diagnostics"][0]["code"], json!("UnknownFieldPreserved"));
    assert_eq!(report["metrics"]["UnknownFieldPreserved"], json!(1));
}
