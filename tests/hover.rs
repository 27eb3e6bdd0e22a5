use std::cell::RefCell;
use std::collections::HashMap;

use pretty_assertions::assert_eq;

use coqhover::{
    hover::{Hover, HoverProvider, ProofEngine},
    query::Query,
    response::SymbolPrettyPrinter,
    term::TermLocator,
    textbuf::{CharClasses, Position, TextBuffer},
};

/// Engine answering from a fixed table, and recording the commands it
/// received.
struct FakeEngine {
    answers: HashMap<&'static str, &'static str>,
    received: RefCell<Vec<String>>,
}

impl FakeEngine {
    fn new(answers: &[(&'static str, &'static str)]) -> FakeEngine {
        FakeEngine {
            answers: answers.iter().copied().collect(),
            received: RefCell::new(vec![]),
        }
    }
}

impl ProofEngine for FakeEngine {
    fn hover_query(&self, query: &Query) -> Option<String> {
        let command = query.command();
        self.received.borrow_mut().push(command.clone());
        self.answers.get(command.as_str()).map(|answer| answer.to_string())
    }
}

fn provider() -> HoverProvider {
    let locator = TermLocator::new(CharClasses::coq().unwrap());
    HoverProvider::new(locator, SymbolPrettyPrinter::coq().unwrap())
}

#[test]
fn hover_over_qualified_identifier() {
    let engine = FakeEngine::new(&[(
        "Check Nat.add.",
        "Nat.add\n\t : nat -> nat -> nat\n",
    )]);
    let buffer = TextBuffer::new("Compute Nat.add 1 2.");

    let hover = provider().provide(&buffer, Position::new(0, 10), &engine);

    assert_eq!(hover, Some(Hover::new("nat ➞ nat ➞ nat".to_string())));
    assert_eq!(*engine.received.borrow(), vec!["Check Nat.add.".to_string()]);
}

#[test]
fn hover_over_notation() {
    let engine = FakeEngine::new(&[(
        "Check \"<->\".",
        "iff\n\t : Prop -> Prop -> Prop\nwhere\nA <-> B := iff A B\n",
    )]);
    let buffer = TextBuffer::new("Lemma l : A <-> B.");

    let hover = provider().provide(&buffer, Position::new(0, 13), &engine);

    assert_eq!(hover.map(|h| h.value), Some("Prop ➞ Prop ➞ Prop".to_string()));
}

#[test]
fn hover_multi_line_type() {
    let engine = FakeEngine::new(&[(
        "Check plus_comm.",
        "plus_comm\n\t : forall n m : nat,\n       n + m = m + n\n",
    )]);
    let buffer = TextBuffer::new("rewrite plus_comm.");

    let hover = provider().provide(&buffer, Position::new(0, 12), &engine);

    assert_eq!(
        hover.map(|h| h.value),
        Some("∀ n m : nat,\nn + m = m + n".to_string())
    );
}

#[test]
fn no_query_on_whitespace() {
    let engine = FakeEngine::new(&[]);
    let buffer = TextBuffer::new("intros.    auto.");

    assert_eq!(provider().provide(&buffer, Position::new(0, 9), &engine), None);
    assert!(engine.received.borrow().is_empty());
}

#[test]
fn no_hover_without_answer() {
    let engine = FakeEngine::new(&[]);
    let buffer = TextBuffer::new("foo");

    assert_eq!(provider().provide(&buffer, Position::new(0, 1), &engine), None);
    assert_eq!(*engine.received.borrow(), vec!["Check foo.".to_string()]);
}

#[test]
fn no_hover_for_empty_type() {
    let engine = FakeEngine::new(&[("Check foo.", "foo\n\t : \n")]);
    let buffer = TextBuffer::new("foo");

    assert_eq!(provider().provide(&buffer, Position::new(0, 0), &engine), None);
}

#[test]
fn render_end_to_end() {
    let provider = provider();

    let hover = provider.render("and\n\t : forall A B : Prop, Prop\n").unwrap();
    assert_eq!(hover.value, "∀ A B : Prop, Prop");
    assert_eq!(hover.language, "coq");

    let hover = provider
        .render("ex_intro\n\t : forall (A : Type) (P : A -> Prop) (x : A),\n       P x -> exists y, P y\n")
        .unwrap();
    assert_eq!(
        hover.value,
        "∀ (A : Type) (P : A ➞ Prop) (x : A),\nP x ➞ ∃ y, P y"
    );
}
