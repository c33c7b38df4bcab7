use std::collections::HashSet;

use mailblocks_core::{
    Action, Block, BlockId, BlockKind, BlockList, BuilderConfig, BuilderError, BuilderState,
    EmailValue, Outcome, Template,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn starting_template_is_the_initial_snapshot() {
    let state = BuilderState::from_template(Template::Announcement, BuilderConfig::default());

    assert_eq!(state.blocks().len(), Template::Announcement.blocks().len());
    assert_eq!(state.history_len(), 1);
    assert!(!state.can_undo());
    assert_eq!(
        state.blocks().at(0).unwrap().content.get("text"),
        Some(&json!("Big news"))
    );
}

#[test]
fn template_blocks_keep_kind_defaults_not_overridden() {
    let state = BuilderState::from_template(Template::Welcome, BuilderConfig::default());
    let heading = state.blocks().at(0).unwrap();

    assert_eq!(heading.style.get("fontSize"), Some(&json!("24px")));
    assert_eq!(heading.style.get("color"), Some(&json!("#333333")));
}

#[test]
fn loading_a_template_is_one_undoable_edit() {
    let mut state = BuilderState::default();
    state.append(BlockKind::Html);
    let before = state.blocks().clone();

    assert_eq!(
        state.apply(Action::LoadTemplate {
            template: Template::Newsletter
        }),
        Ok(Outcome::Applied)
    );
    assert_eq!(state.blocks().len(), 8);
    assert_eq!(state.selected(), None);

    let ids: HashSet<_> = state.blocks().ids().into_iter().collect();
    assert_eq!(ids.len(), 8);

    state.undo();
    assert_eq!(state.blocks(), &before);
}

#[test]
fn template_names_round_trip() {
    for template in Template::ALL {
        assert_eq!(template.as_str().parse::<Template>(), Ok(template));
    }
    assert!("holiday".parse::<Template>().is_err());
}

#[test]
fn replace_rejects_duplicate_ids_and_keeps_state() {
    let mut state = BuilderState::default();
    state.append(BlockKind::Text);
    let before = state.blocks().clone();

    let result = state.apply(Action::Replace {
        blocks: vec![
            Block::new("dup".into(), BlockKind::Text),
            Block::new("dup".into(), BlockKind::Image),
        ],
    });

    assert_eq!(result, Err(BuilderError::DuplicateId("dup".into())));
    assert_eq!(state.blocks(), &before);
}

#[test]
fn fresh_ids_skip_ids_already_in_the_list() {
    let mut state = BuilderState::default();
    state
        .replace(vec![Block::new("block-1".into(), BlockKind::Text)])
        .unwrap();

    let id = state.append(BlockKind::Text);
    assert_eq!(id.as_str(), "block-2");
}

#[test]
fn email_value_serializes_blocks_in_order() {
    let mut state = BuilderState::new(BuilderConfig::default().id_prefix("b"));
    state.append(BlockKind::Divider);
    state.append(BlockKind::Spacer);

    let value = EmailValue::from_blocks(state.blocks());
    let json: serde_json::Value = serde_json::from_str(&value.to_json().unwrap()).unwrap();

    assert_eq!(json["schema"], json!("mailblocks"));
    assert_eq!(json["version"], json!(1));
    assert_eq!(json["blocks"][0]["id"], json!("b-1"));
    assert_eq!(json["blocks"][0]["kind"], json!("divider"));
    assert_eq!(json["blocks"][1]["style"]["height"], json!("20px"));

    let restored = EmailValue::from_json_str(&value.to_json_pretty().unwrap())
        .unwrap()
        .into_blocks()
        .unwrap();
    assert_eq!(&restored, state.blocks());
}

#[test]
fn email_value_fills_schema_defaults() {
    let value = EmailValue::from_json_str(
        r#"{ "blocks": [ { "id": "x", "kind": "text", "content": { "text": "hi" } } ] }"#,
    )
    .unwrap();

    assert_eq!(value.schema, "mailblocks");
    assert_eq!(value.version, 1);
    assert!(value.blocks[0].style.is_empty());
}

#[test]
fn actions_deserialize_from_tagged_json() {
    let actions: Vec<Action> = serde_json::from_value(json!([
        { "action": "append", "kind": "social" },
        { "action": "update", "id": "block-1", "style": { "align": "left" } },
        { "action": "shift", "id": "block-1", "direction": "down" },
        { "action": "select" },
        { "action": "load_template", "template": "welcome" },
        { "action": "undo" }
    ]))
    .unwrap();

    assert_eq!(actions[0], Action::Append { kind: BlockKind::Social });
    assert!(matches!(
        &actions[1],
        Action::Update { content: None, style: Some(style), .. } if style.contains_key("align")
    ));
    assert_eq!(actions[3], Action::Select { id: None });
    assert_eq!(actions[5], Action::Undo);
}

#[test]
fn deserialized_block_list_rejects_repeated_ids() {
    let err = serde_json::from_str::<BlockList>(
        r#"[{ "id": "x", "kind": "text" }, { "id": "x", "kind": "image" }]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate block id: x"));

    let list: BlockList = serde_json::from_str(
        r#"[{ "id": "x", "kind": "text" }, { "id": "y", "kind": "image" }]"#,
    )
    .unwrap();
    let state = BuilderState::with_blocks(list, BuilderConfig::default());
    assert_eq!(state.blocks().ids(), vec![BlockId::from("x"), BlockId::from("y")]);
    assert_eq!(
        serde_json::to_value(state.blocks()).unwrap()[1]["kind"],
        json!("image")
    );
}
