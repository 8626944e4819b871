use botlang::{
    Lexicon, LexiconSource, Pipeline, ReplacePasses, RuleEntry, clean, process, replace, replace_emoji,
    replace_frivolous, replace_with, tag_all, tag_test,
};

#[test]
fn clean_properties() {
    // Array of (expected, input)
    let cases: Vec<(&str, &str)> = vec![
        ("3+4=7", "3+4=7"),
        ("__B__", "__B__"),
        ("this is spaced out", "this    is     spaced     out"),
        ("how much is 1000.00", "how much is 1,000.00"),
        ("What's up", "What’s up"),
        ("I said \"shut up\"", "I said “shut up”"),
        ("", "œ"),
        ("😊", "😊"),
        ("", ""),
    ];
    for (expected, input) in cases {
        assert_eq!(clean(input), expected, "input: {input:?}");
    }
}

#[test]
fn replace_properties() {
    let cases: Vec<(&str, &str)> = vec![
        ("November 1st I weighed 90 kilograms total", "Nov 1st I weighed 90 kgs. total"),
        ("I shared it on Facebook with friends, for example : you", "I shared it on FB w/ friends, ie: you"),
        ("I am on the yellow zebra", "I'm on the yelow zebra"),
        ("I will listen to you all", "I'll listen to y'all"),
        ("do not make it right", "do n't make it right"),
        ("it is all good", "it's all good"),
        ("what is up", "What's up"),
        ("you should not have", "you shouldn't have"),
        ("you should go", "you should go"),
        ("armor ax colored gold", "armour axe coloured gold"),
        ("are we scheduled Thursday for the restaurant", "are we sceduled thrsday for teh restraunt"),
        ("how do you", "hwo do you"),
        ("who is you", "hwo is you"),
        ("I could not help it, could I", "Well , I could not help it, could I"),
        ("how are you", "hwo r u"),
        ("of your friends", "fo ur friends"),
        ("I know what is going on because I can see you", "ik wats goin on coz I can c u"),
        ("okay my name is Adam", "okay my name is Adam"),
        ("yes it is the capital of spain", "yes it is the capital of spain"),
        ("cliché", "cliché"),
        ("color?", "colour?"),
        ("...September", "...Sept"),
        ("...aluminum, my favorite!!", "...aluminium, my favourite!!"),
        ("", ""),
        ("?!", "?!"),
    ];

    for (expected, input) in cases {
        assert_eq!(replace(input), expected, "input: {input:?}");
    }
}

#[test]
fn single_passes() {
    assert_eq!(replace_emoji("You make me 😊"), "You make me :blush:");
    assert_eq!(replace_frivolous("let me see"), "let me see");
    assert_eq!(replace_frivolous("ahh let me see"), "let me see");
    assert_eq!(replace_with("colour w/ u", ReplacePasses::BRITISH), "color w/ u");
    assert_eq!(replace_with("colour w/ u", ReplacePasses::empty()), "colour w/ u");
}

#[test]
fn idempotence() {
    let inputs = [
        "  What’s   up with 1,000,000 “things”…  ",
        "Well , ik wats goin on coz I can c u 😊",
        "I'm on the yelow zebra w/ y'all, ie: you",
        "hwo do you feel about teh colour grey?",
        "um, ahh, Nov 1st 90 kgs. ❤\u{FE0F}",
        "hwo r u",
        "fo ur friends",
        "\u{1FFD} 12,345,67",
        "",
    ];
    for input in inputs {
        let cleaned = clean(input);
        assert_eq!(clean(&cleaned), cleaned, "clean: {input:?}");
        let replaced = replace(input);
        assert_eq!(replace(&replaced), replaced, "replace: {input:?}");
    }
}

#[test]
fn tag_properties() {
    let cases: Vec<(Vec<&str>, &str)> = vec![
        (vec!["disgust", "goodbye", "stop"], "eww , shut up , I have to go"),
        (vec!["no"], "no"),
        (vec!["slack_emoji_people", "slack_emoji_symbols"], ":wave: :one: :heart:"),
        (vec!["laugh", "sad", "surprise"], "xD :'( :o"),
        (vec!["laugh"], "haha!"),
        (vec!["surprise"], "...omg!"),
        (vec!["intent_move"], "John went to the kitchen"),
        (vec!["intent_get"], "John got the ball"),
        (vec![], "I left the house"),
        (vec![], ""),
        (vec![], "..."),
    ];
    for (expected, input) in cases {
        assert_eq!(tag_all(input), expected, "input: {input:?}");
    }
}

#[test]
fn tag_test_properties() {
    assert!(tag_test("yes", "I am sure"));
    assert!(!tag_test("yes", "Nope"));
    assert!(tag_test("no", "Nope"));
    assert!(tag_test("apology", "excuse me princess"));
    assert!(!tag_test("apology", "well excuse me princess"));
    assert!(tag_test("intent_move", "John went to the kitchen"));
    assert!(!tag_test("not_a_label", "John went to the kitchen"));
}

#[test]
fn tagging_is_deterministic() {
    let first = tag_all("hi there");
    assert_eq!(first, ["hello"]);
    for _ in 0..5 {
        assert_eq!(tag_all("hi there"), first);
        assert_eq!(tag_all("nothing to see"), Vec::<String>::new());
    }
}

#[test]
fn shared_lexicon_across_threads() {
    let pipeline = Pipeline::default();
    let inputs = ["hi there", "xD :'( :o", "John went to the kitchen", "eww , shut up , I have to go"];
    let expected: Vec<Vec<String>> = inputs.iter().map(|text| pipeline.tag_all(text)).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    for (text, tags) in inputs.iter().zip(&expected) {
                        assert_eq!(&pipeline.tag_all(text), tags);
                        assert_eq!(pipeline.replace(text), replace(text));
                    }
                }
            });
        }
    });
}

#[test]
fn process_cleans_then_replaces_and_tags() {
    let out = process("  eww ,  shut up ,  I have to go  ");
    assert_eq!(out.cleaned, "eww , shut up , I have to go");
    assert_eq!(out.replaced, out.cleaned);
    assert_eq!(out.tags, ["disgust", "goodbye", "stop"]);
    assert_eq!(out.categories.keyword, out.tags);
}

#[test]
fn user_lexicon_extends_builtin() {
    let user = LexiconSource::from_json(
        r#"{
            "british": [{ "pattern": { "phrase": "colour" }, "output": "hue" }],
            "keyword_tags": [{ "pattern": { "phrase": "ahoy" }, "output": "hello" }]
        }"#,
    )
    .unwrap();
    let mut source = LexiconSource::builtin();
    source.extend(user);
    let lexicon = Lexicon::compile(&source).unwrap();
    let pipeline = Pipeline::new(&lexicon);

    assert_eq!(pipeline.replace("my favourite colour"), "my favorite hue");
    assert_eq!(pipeline.tag_all("ahoy, hi"), ["hello"]);
}

#[test]
fn invalid_user_lexicon_is_an_error() {
    let mut source = LexiconSource::builtin();
    source.text_emoji_tags.push(RuleEntry::regex("(unclosed", "broken"));
    let err = Lexicon::compile(&source).unwrap_err();
    assert!(err.to_string().starts_with("text_emoji_tags: entry"), "{err}");
}
