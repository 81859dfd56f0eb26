//! Wrap-name resolution scenarios: literal names, inferred names and rules
//! computed against the instance being mapped.

use portray_config::{Config, Value, WrapHint, WrapRule};
use rstest::rstest;

struct RenderContext {
    plural: bool,
}

#[test]
fn no_directive_means_no_wrapping() {
    let config = Config::new();
    assert_eq!(config.wrap_for("Music::SongRepresenter", &(), &[]), None);
}

#[rstest]
#[case::literal_name(WrapRule::from("songs"), Some("songs"))]
#[case::infer(WrapRule::from(true), Some("song_representer"))]
#[case::suppressed(WrapRule::from(false), None)]
fn static_rules_resolve_immediately(#[case] rule: WrapRule, #[case] expected: Option<&str>) {
    let mut config = Config::new();
    config.set_wrap(rule);

    let wrap = config.wrap_for("Music::SongRepresenter", &(), &[]);
    assert_eq!(wrap.as_deref(), expected);
}

#[test]
fn deferred_rules_see_the_mapped_instance() {
    let mut config = Config::new();
    config.set_wrap(WrapRule::deferred(|context, _args| {
        context
            .downcast_ref::<RenderContext>()
            .map_or(WrapHint::Skip, |render| {
                if render.plural {
                    WrapHint::Name("songs".to_owned())
                } else {
                    WrapHint::Infer
                }
            })
    }));

    let plural = RenderContext { plural: true };
    assert_eq!(
        config.wrap_for("Music::SongRepresenter", &plural, &[]),
        Some("songs".to_owned())
    );

    let singular = RenderContext { plural: false };
    assert_eq!(
        config.wrap_for("Music::SongRepresenter", &singular, &[]),
        Some("song_representer".to_owned())
    );

    // An unexpected context shape suppresses wrapping instead of guessing.
    assert_eq!(config.wrap_for("Music::SongRepresenter", &(), &[]), None);
}

#[test]
fn deferred_rules_receive_positional_arguments() {
    let mut config = Config::new();
    config.set_wrap(WrapRule::deferred(|_context, args| {
        match args.first().and_then(Value::as_str) {
            Some(key) => WrapHint::Name(key.to_owned()),
            None => WrapHint::Infer,
        }
    }));

    assert_eq!(
        config.wrap_for("Song", &(), &[Value::from("explicit")]),
        Some("explicit".to_owned())
    );
    assert_eq!(config.wrap_for("Song", &(), &[]), Some("song".to_owned()));
}

#[test]
fn deferred_skip_beats_a_configured_directive() {
    let mut config = Config::new();
    config.set_wrap(WrapRule::deferred(|_context, _args| WrapHint::Skip));

    assert_eq!(config.wrap_for("Song", &(), &[]), None);
}
