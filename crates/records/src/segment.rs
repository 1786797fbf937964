//! Street segmentation over one hand's text.
//!
//! A street runs from its opening marker to the next street's marker. If
//! no later street begins, it runs through the first `wins` line. If the
//! hand was cut off (no later marker, no `wins`), it takes everything that
//! remains so a disconnect still contributes whatever was observed.
use super::*;

/// Section markers that close any street without opening a new one.
const TERMINALS: [&str; 2] = ["*** SHOW", "*** SUMMARY"];

/// The lines of one street, in order, excluding its marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    street: Street,
    lines: &'a [&'a str],
}

impl<'a> Segment<'a> {
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn lines(&self) -> &'a [&'a str] {
        self.lines
    }
    /// Parsed action events, unrecognized lines skipped.
    pub fn events(self) -> impl Iterator<Item = ActionEvent> + 'a {
        let street = self.street;
        self.lines
            .iter()
            .filter_map(move |line| ActionEvent::parse(line, street))
    }
}

/// Splits a hand into its header and street segments.
///
/// The header is everything up to and including the first big blind post;
/// the hand body is everything after it. Without a big blind post the body
/// is the whole text.
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    lines: Vec<&'a str>,
    body: usize,
}

impl<'a> From<&'a str> for Segmenter<'a> {
    fn from(text: &'a str) -> Self {
        let lines = text.lines().map(str::trim).collect::<Vec<&str>>();
        let body = lines
            .iter()
            .position(|line| Self::is_big_blind(line))
            .map_or(0, |i| i + 1);
        Self { lines, body }
    }
}

impl<'a> Segmenter<'a> {
    /// Every line of the hand.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }
    /// Lines before the hand body: title, seats, and blind posts.
    pub fn header(&self) -> &[&'a str] {
        &self.lines[..self.body]
    }
    /// The first big blind post, if the blinds went in.
    pub fn big_blind(&self) -> Option<&'a str> {
        self.header().last().copied().filter(|l| Self::is_big_blind(l))
    }
    /// True if any line records a pot being won.
    pub fn is_complete(&self) -> bool {
        self.body().iter().any(|line| Self::is_win(line))
    }
    /// The lines of `street`, or `None` if its marker never appears.
    /// Preflop is always present.
    pub fn segment(&self, street: Street) -> Option<Segment<'_>> {
        let start = match street.marker() {
            None => self.body,
            Some(marker) => self.find(self.body, |l| l.starts_with(marker))? + 1,
        };
        let later = street
            .later()
            .filter_map(|s| s.marker())
            .filter_map(|m| self.find(start, |l| l.starts_with(m)))
            .min();
        let terminal = self.find(start, |l| TERMINALS.iter().any(|t| l.starts_with(t)));
        let end = match later {
            Some(next) => terminal.map_or(next, |t| t.min(next)),
            None => self
                .find(start, Self::is_win)
                .map(|w| w + 1)
                .or(terminal)
                .unwrap_or(self.lines.len()),
        };
        Some(Segment {
            street,
            lines: &self.lines[start..end.max(start)],
        })
    }
    /// Segments of every street that was dealt, in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        Street::all().into_iter().filter_map(move |s| self.segment(s))
    }

    fn body(&self) -> &[&'a str] {
        &self.lines[self.body..]
    }
    fn find(&self, from: usize, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.lines
            .iter()
            .skip(from)
            .position(|line| predicate(line))
            .map(|i| i + from)
    }
    fn is_big_blind(line: &str) -> bool {
        line.contains(": posts big blind")
    }
    fn is_win(line: &str) -> bool {
        ActionEvent::parse(line, Street::Pref).is_some_and(|e| e.verb() == Verb::Win)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = "\
seat 1: A (1000 in chips)
seat 2: B (1000 in chips)
A: posts small blind 10
B: posts big blind 20
*** HOLE CARDS ***
A: raises to 60
B: calls 60
*** FLOP *** [Ah, Kd, 2c]
B: checks
A: bets 60
B: calls 60
*** TURN *** [Ah, Kd, 2c] [7s]
B: checks
A: checks
*** RIVER *** [Ah, Kd, 2c, 7s] [Qh]
B: bets 100
A: calls 100
B: shows [Qd Qs]
B: wins 440";

    fn verbs(segment: Segment) -> Vec<Verb> {
        segment.events().map(|e| e.verb()).collect()
    }

    #[test]
    fn header_ends_at_big_blind() {
        let segmenter = Segmenter::from(COMPLETE);
        assert_eq!(segmenter.header().len(), 4);
        assert_eq!(segmenter.big_blind(), Some("B: posts big blind 20"));
        assert!(segmenter.is_complete());
    }
    #[test]
    fn streets_are_bounded_by_markers() {
        let segmenter = Segmenter::from(COMPLETE);
        let preflop = segmenter.segment(Street::Pref).unwrap();
        assert_eq!(verbs(preflop), vec![Verb::Raise, Verb::Call]);
        let flop = segmenter.segment(Street::Flop).unwrap();
        assert_eq!(verbs(flop), vec![Verb::Check, Verb::Bet, Verb::Call]);
        let river = segmenter.segment(Street::Rive).unwrap();
        assert_eq!(
            verbs(river),
            vec![Verb::Bet, Verb::Call, Verb::Show, Verb::Win]
        );
        assert_eq!(segmenter.segments().count(), 4);
    }
    #[test]
    fn street_ends_at_first_win() {
        let text = "\
seat 1: A (1000 in chips)
seat 2: B (1000 in chips)
A: posts small blind 10
B: posts big blind 20
A: raises to 60
B: folds
A: wins 40
A: shows [Ah Ad]";
        let segmenter = Segmenter::from(text);
        let preflop = segmenter.segment(Street::Pref).unwrap();
        assert_eq!(verbs(preflop), vec![Verb::Raise, Verb::Fold, Verb::Win]);
        assert!(segmenter.segment(Street::Flop).is_none());
    }
    #[test]
    fn truncated_hand_takes_the_remainder() {
        let text = "\
seat 1: A (1000 in chips)
seat 2: B (1000 in chips)
A: posts small blind 10
B: posts big blind 20
A: calls 20
B: checks
*** FLOP *** [Ah, Kd, 2c]
B: bets 20";
        let segmenter = Segmenter::from(text);
        assert!(!segmenter.is_complete());
        let flop = segmenter.segment(Street::Flop).unwrap();
        assert_eq!(verbs(flop), vec![Verb::Bet]);
        assert!(segmenter.segment(Street::Turn).is_none());
    }
    #[test]
    fn no_blinds_makes_the_whole_text_preflop() {
        let text = "A: calls 20\nB: checks";
        let segmenter = Segmenter::from(text);
        assert_eq!(segmenter.big_blind(), None);
        assert_eq!(segmenter.header().len(), 0);
        let preflop = segmenter.segment(Street::Pref).unwrap();
        assert_eq!(preflop.lines().len(), 2);
    }
    #[test]
    fn summary_closes_the_last_street() {
        let text = "\
B: posts big blind 20
A: calls 20
B: checks
*** FLOP *** [Ah, Kd, 2c]
B: checks
A: checks
*** SUMMARY ***
Total pot 40";
        let segmenter = Segmenter::from(text);
        let flop = segmenter.segment(Street::Flop).unwrap();
        assert_eq!(flop.lines().len(), 2);
    }
}
