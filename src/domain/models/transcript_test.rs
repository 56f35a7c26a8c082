use super::super::Speaker;
use super::super::Turn;
use super::Transcript;

#[test]
fn it_starts_empty() {
    let transcript = Transcript::new();
    assert_eq!(transcript.len(), 0);
    assert!(transcript.is_empty());
    assert!(transcript.last().is_none());
}

#[test]
fn it_appends_in_order() {
    let mut transcript = Transcript::new();
    transcript.push(Turn::new(Speaker::User, "first"));
    transcript.push(Turn::new(Speaker::Assistant, "second"));

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.turns()[0].text, "first");
    assert_eq!(transcript.turns()[1].text, "second");
    assert_eq!(transcript.last().unwrap().speaker, Speaker::Assistant);
}
