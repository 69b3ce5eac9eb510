//! Line-based terminal play through the whole flow.

use std::{
    io::{BufRead, Write},
    thread,
    time::Instant,
};

use anyhow::Result;
use game_core::{
    engine::TurnState, roster::placeholder_name, FlowEvent, GameFlow, Outcome,
    ParticipantId, Screen, ScreenKind, Settings,
};

pub struct Session<R, W> {
    input: R,
    out: W,
    title: String,
    subtitle: String,
    wait_for_timers: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, settings: &Settings) -> Self {
        Self {
            input,
            out,
            title: settings.title.clone(),
            subtitle: settings.subtitle.clone(),
            wait_for_timers: true,
        }
    }

    /// Fire timers immediately instead of sleeping until their deadlines.
    pub fn skip_waits(mut self) -> Self {
        self.wait_for_timers = false;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs games until the user quits or input ends. With `once`, stops after the first summary.
    pub fn run(&mut self, flow: &mut GameFlow, once: bool) -> Result<()> {
        loop {
            let keep_going = match flow.kind() {
                ScreenKind::Entry => self.entry(flow)?,
                ScreenKind::Roster => self.roster(flow)?,
                ScreenKind::Game => self.turn(flow)?,
                ScreenKind::Summary => self.summary(flow, once)?,
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    fn entry(&mut self, flow: &mut GameFlow) -> Result<bool> {
        writeln!(self.out, "\n{}\n{}", self.title, self.subtitle)?;
        match self.prompt("Enter를 눌러 시작하세요 (q: 종료)")? {
            Some(raw) if !raw.trim().eq_ignore_ascii_case("q") => {
                log_cues(&flow.start()?);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn roster(&mut self, flow: &mut GameFlow) -> Result<bool> {
        let default = flow.roster_mut()?.count();
        let Some(raw) = self.prompt(&format!("몇 명이 참여하나요? (2-30) [{default}]"))? else {
            return Ok(false);
        };
        if !raw.trim().is_empty() {
            flow.roster_mut()?.set_count_input(&raw);
        }
        let count = flow.submit_count()?;
        writeln!(self.out, "{count}명이 참여합니다.")?;

        for index in 0..count as usize {
            let Some(name) = self.prompt(&format!("{}번 이름 [{}]", index + 1, placeholder_name(index)))? else {
                return Ok(false);
            };
            flow.roster_mut()?.set_name(index, name)?;
        }
        log_cues(&flow.submit_names()?);
        Ok(true)
    }

    fn turn(&mut self, flow: &mut GameFlow) -> Result<bool> {
        let Some(engine) = flow.engine() else {
            return Ok(true);
        };

        if engine.is_complete() {
            if let Some(deadline) = flow.next_deadline() {
                if self.wait_for_timers {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                }
                log_cues(&flow.poll(deadline));
            }
            return Ok(true);
        }

        self.print_board(flow)?;
        let Some(engine) = flow.engine() else {
            return Ok(true);
        };
        let classifying = matches!(engine.state(), TurnState::AwaitingClassification { .. });
        let total = engine.participants().len();
        let prompt = engine.instruction();

        if classifying {
            let options: Vec<String> = Outcome::ALL
                .iter()
                .enumerate()
                .map(|(index, outcome)| format!("{}) {outcome}", index + 1))
                .collect();
            writeln!(self.out, "{}  b) 뒤로", options.join("  "))?;
            let Some(raw) = self.prompt(&prompt)? else {
                return Ok(false);
            };
            let raw = raw.trim();
            if raw.eq_ignore_ascii_case("b") {
                flow.cancel_classification()?;
                return Ok(true);
            }
            match parse_outcome(raw) {
                Some(outcome) => log_cues(&flow.classify(outcome, Instant::now())?),
                None => writeln!(self.out, "1-6 또는 결과 이름을 입력하세요.")?,
            }
            return Ok(true);
        }

        let Some(raw) = self.prompt(&prompt)? else {
            return Ok(false);
        };
        match raw.trim().parse::<usize>() {
            Ok(n) if (1..=total).contains(&n) => {
                let events = flow.select(ParticipantId((n - 1) as u32))?;
                for event in &events {
                    if let FlowEvent::Ignored(reason) = event {
                        writeln!(self.out, "{}", reason.message())?;
                    }
                }
                log_cues(&events);
            }
            _ => writeln!(self.out, "1-{total} 사이의 번호를 입력하세요.")?,
        }
        Ok(true)
    }

    fn summary(&mut self, flow: &mut GameFlow, once: bool) -> Result<bool> {
        let Screen::Summary(stage) = flow.screen() else {
            return Ok(true);
        };
        writeln!(self.out, "\n🎉 게임 결과 🎉")?;
        write!(self.out, "{}", stage.summary.render_text())?;
        if self.wait_for_timers {
            if let Some(deadline) = flow.next_deadline() {
                self.out.flush()?;
                thread::sleep(deadline.saturating_duration_since(Instant::now()));
                log_cues(&flow.poll(deadline));
            }
        }
        if once {
            return Ok(false);
        }
        match self.prompt("r: 새 게임 시작, q: 종료")? {
            Some(raw) if raw.trim().eq_ignore_ascii_case("r") => {
                log_cues(&flow.restart()?);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn print_board(&mut self, flow: &GameFlow) -> Result<()> {
        let Some(engine) = flow.engine() else {
            return Ok(());
        };
        writeln!(self.out)?;
        for (index, participant) in engine.participants().iter().enumerate() {
            let marker = if engine.cursor() == Some(participant.id) {
                "▶"
            } else if participant.nominated || engine.first_selector() == Some(participant.id) {
                "✓"
            } else {
                " "
            };
            writeln!(self.out, " {marker} {:>2}. {}", index + 1, participant.name)?;
        }
        for edge in engine.edges() {
            let name = |id| {
                engine
                    .participant(id)
                    .map(|p| p.name.as_str())
                    .unwrap_or("?")
            };
            writeln!(self.out, "   {} → {} ({})", name(edge.from), name(edge.to), edge.outcome)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}: ")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn parse_outcome(raw: &str) -> Option<Outcome> {
    match raw.parse::<usize>() {
        Ok(n) if (1..=Outcome::ALL.len()).contains(&n) => Some(Outcome::ALL[n - 1]),
        Ok(_) => None,
        Err(_) => raw.parse().ok(),
    }
}

fn log_cues(events: &[FlowEvent]) {
    for event in events {
        match event {
            FlowEvent::Cue(cue) => tracing::debug!(?cue, "sound cue"),
            FlowEvent::ScreenChanged(kind) => tracing::debug!(screen = kind.name(), "screen"),
            FlowEvent::GameFinished { edges } => tracing::info!(edges, "game finished"),
            FlowEvent::Ignored(_) | FlowEvent::CelebrationEnded => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, time::Duration};

    use game_core::FlowSettings;

    use super::*;

    fn flow_with(handoff: Duration, celebration: Duration) -> GameFlow {
        GameFlow::new(FlowSettings {
            default_participant_count: 10,
            handoff_delay: handoff,
            celebration,
        })
    }

    fn run_session(mut flow: GameFlow, input: &str, wait: bool) -> (GameFlow, String) {
        let settings = Settings::default();
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), &settings);
        if !wait {
            session = session.skip_waits();
        }
        session.run(&mut flow, true).expect("session");
        let out = String::from_utf8(session.into_output()).expect("utf8");
        (flow, out)
    }

    fn run_script(input: &str) -> (GameFlow, String) {
        let flow = flow_with(Duration::from_millis(500), Duration::from_secs(3));
        run_session(flow, input, false)
    }

    #[test]
    fn plays_three_player_game_to_summary() {
        let input = "\n3\nA\nB\n\n1\n2\n2\n3\nb\n3\n5\n";
        let (flow, out) = run_script(input);

        let Screen::Summary(stage) = flow.screen() else {
            panic!("expected summary screen, output:\n{out}");
        };
        assert_eq!(stage.summary.total_edges, 2);
        assert_eq!(stage.summary.count(Outcome::Do), 1);
        assert_eq!(stage.summary.count(Outcome::Yut), 1);
        assert!(out.contains("  B → Participant 3"));
        assert!(out.contains("총 연결 수: 2"));
    }

    #[test]
    fn summary_leaves_celebration_running_when_not_waiting() {
        let (flow, _) = run_script("\n2\n\n\n1\n2\n4\n");
        assert_eq!(flow.kind(), ScreenKind::Summary);
        assert!(flow.is_celebrating());
    }

    #[test]
    fn summary_waits_out_the_celebration() {
        let flow = flow_with(Duration::from_millis(5), Duration::from_millis(20));
        let started = Instant::now();
        let (flow, out) = run_session(flow, "\n2\n\n\n1\n2\n4\n", true);
        assert!(out.contains("🎉 게임 결과 🎉"));
        assert!(!flow.is_celebrating());
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn explains_ignored_clicks() {
        let input = "\n2\n\n\n1\n1\n";
        let (_, out) = run_script(input);
        assert!(out.contains("자기 자신은 지목할 수 없습니다."));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (flow, _) = run_script("\n4\n");
        assert_eq!(flow.kind(), ScreenKind::Roster);
    }

    #[test]
    fn outcome_accepts_numbers_and_labels() {
        assert_eq!(parse_outcome("1"), Some(Outcome::BackDo));
        assert_eq!(parse_outcome("6"), Some(Outcome::Mo));
        assert_eq!(parse_outcome("7"), None);
        assert_eq!(parse_outcome("걸"), Some(Outcome::Geol));
        assert_eq!(parse_outcome("nope"), None);
    }
}
