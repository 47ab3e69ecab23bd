pub mod activity;
pub mod energy;
pub mod roster;
pub mod wordle;

use std::io::{self, Write};

use anyhow::Result;
use log::{debug, info, warn};
use rand::Rng;

use crate::game::activity::GeneratorConfig;
use crate::game::energy::{DayAdvance, DayCycle, Spend};
use crate::game::roster::{ActivityPool, Agent, RosterConfig};
use crate::llm::TextGenerator;

// ---------------------------------------------------------------------------
// Game configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Last playable day; resting on this day forces the accusation.
    pub deadline_day: u32,
    /// Energy restored at the start of every day.
    pub max_energy: u32,
    pub inspect_cost: u32,
    /// Charged once per conversation, regardless of message count.
    pub chat_cost: u32,
    pub puzzle_bonus: u32,
    pub chat_max_tokens: usize,
    pub generator: GeneratorConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deadline_day: 3,
            max_energy: 5,
            inspect_cost: 1,
            chat_cost: 2,
            puzzle_bonus: 2,
            chat_max_tokens: 120,
            generator: GeneratorConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// One observed activity record. Deduplicated by exact equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub day: u32,
    pub agent: String,
    pub text: String,
}

struct GameState {
    agents: Vec<Agent>,
    pool: ActivityPool,
    cycle: DayCycle,
    clues: Vec<Clue>,
    game_over: bool,
    config: GameConfig,
}

/// Result of a gated inspection.
enum InspectOutcome {
    Log(Vec<String>),
    OutOfEnergy { need: u32, have: u32 },
}

impl GameState {
    /// Validate configuration, build the roster, hide the culprit, and
    /// generate day one. Any configuration error aborts here, before the
    /// first menu is shown.
    fn setup(config: GameConfig, roster: RosterConfig, rng: &mut impl Rng) -> Result<Self> {
        config.generator.validate()?;

        let (mut agents, pool) = roster.build()?;
        let idx = roster::assign_corruption(&mut agents, rng);
        debug!("corrupted agent this round: {}", agents[idx].name);

        let mut state = Self {
            agents,
            pool,
            cycle: DayCycle::new(config.max_energy, config.deadline_day),
            clues: Vec::new(),
            game_over: false,
            config,
        };
        activity::regenerate_all(&mut state.agents, &state.pool, config.generator, rng)?;
        Ok(state)
    }

    /// Pay for and perform an inspection. Every shown activity is appended
    /// to the clue log unless an identical record is already there.
    fn inspect_agent(&mut self, idx: usize) -> InspectOutcome {
        match self.cycle.try_spend(self.config.inspect_cost) {
            Spend::InsufficientEnergy { need, have } => InspectOutcome::OutOfEnergy { need, have },
            Spend::Charged => {
                let day = self.cycle.day();
                let agent = &self.agents[idx];
                let log = agent.daily_activities.clone();
                for text in &log {
                    let clue = Clue {
                        day,
                        agent: agent.name.clone(),
                        text: text.clone(),
                    };
                    if !self.clues.contains(&clue) {
                        self.clues.push(clue);
                    }
                }
                InspectOutcome::Log(log)
            }
        }
    }

    /// Charge for an interview up front. A generation failure afterwards is
    /// the collaborator's problem; the charge stays spent and nothing else
    /// in the state moves.
    fn charge_conversation(&mut self) -> Spend {
        self.cycle.try_spend(self.config.chat_cost)
    }

    /// Advance to the next day and regenerate every agent's activities.
    /// At the deadline nothing changes and the caller must force the
    /// accusation.
    fn rest(&mut self, rng: &mut impl Rng) -> Result<DayAdvance> {
        let advance = self.cycle.advance_day();
        if let DayAdvance::NewDay(_) = advance {
            activity::regenerate_all(&mut self.agents, &self.pool, self.config.generator, rng)?;
        }
        Ok(advance)
    }

    fn accuse(&mut self, idx: usize) -> Verdict {
        self.game_over = true;
        resolve_accusation(&self.agents, &self.pool, idx)
    }

    fn abandon(&mut self) {
        self.game_over = true;
    }

    fn culprit(&self) -> &Agent {
        self.agents
            .iter()
            .find(|a| a.integrity.is_corrupted())
            .expect("exactly one corrupted agent per game")
    }
}

// ---------------------------------------------------------------------------
// Accusation resolver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The accusation landed on the corrupted agent. `evidence` holds the
    /// suspicious subset of its final day (possibly empty).
    Guilty { accused: String, evidence: Vec<String> },
    /// The accused was innocent. The real culprit is revealed together with
    /// the suspicious subset of its final day.
    Innocent {
        accused: String,
        culprit: String,
        evidence: Vec<String>,
    },
}

/// Pure judgment: no randomness, no mutation. Classification of the final
/// day is re-derived by pool membership, exactly like the inspect view.
fn resolve_accusation(agents: &[Agent], pool: &ActivityPool, accused_idx: usize) -> Verdict {
    let suspicious_of = |agent: &Agent| -> Vec<String> {
        agent
            .daily_activities
            .iter()
            .filter(|a| pool.is_suspicious(&agent.name, a))
            .cloned()
            .collect()
    };

    let accused = &agents[accused_idx];
    if accused.integrity.is_corrupted() {
        Verdict::Guilty {
            accused: accused.name.clone(),
            evidence: suspicious_of(accused),
        }
    } else {
        let culprit = agents
            .iter()
            .find(|a| a.integrity.is_corrupted())
            .expect("exactly one corrupted agent per game");
        Verdict::Innocent {
            accused: accused.name.clone(),
            culprit: culprit.name.clone(),
            evidence: suspicious_of(culprit),
        }
    }
}

// ---------------------------------------------------------------------------
// Interview prompt
// ---------------------------------------------------------------------------

/// Embed the agent's identity, behavioral contract, and alibi around the
/// player's latest line. No conversation history is resent; each exchange
/// stands alone.
fn interview_prompt(agent: &Agent, player_line: &str) -> String {
    format!(
        "You are {name}, the {role} of a nation governed by five AI systems. \
         {description}. Personality: {personality} An investigator is \
         questioning you about recent anomalies across all five systems. \
         Stay in character and answer in at most three sentences. If asked \
         where you were, your account is: \"{alibi}\"\n\n\
         Investigator: {line}\n{name}:",
        name = agent.name,
        role = agent.role,
        description = agent.description,
        personality = agent.personality,
        alibi = agent.alibi,
        line = player_line,
    )
}

fn agent_reply(
    gen: &mut dyn TextGenerator,
    agent: &Agent,
    player_line: &str,
    max_tokens: usize,
) -> Result<String> {
    let prompt = interview_prompt(agent, player_line);
    gen.generate(&prompt, max_tokens)
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Read a 1-based menu choice. Anything else re-prompts; no state changes
/// on invalid input.
fn read_choice(max: usize) -> Result<usize> {
    loop {
        print!("> ");
        io::stdout().flush()?;
        match read_line()?.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => println!("  Pick a number between 1 and {max}."),
        }
    }
}

/// Numbered agent picker with a trailing "back" entry. `None` means the
/// player declined.
fn select_agent(agents: &[Agent], header: &str) -> Result<Option<usize>> {
    println!("\n{header}");
    for (i, agent) in agents.iter().enumerate() {
        println!("{}. {} - {}", i + 1, agent.name, agent.role);
    }
    println!("{}. Back", agents.len() + 1);

    let choice = read_choice(agents.len() + 1)?;
    if choice == agents.len() + 1 {
        Ok(None)
    } else {
        Ok(Some(choice - 1))
    }
}

fn print_intro(config: &GameConfig) {
    println!("\n============================================================");
    println!("                       MOLEHUNT");
    println!("============================================================");
    println!("\nYEAR 2045. Five AI systems govern the nation, each running");
    println!("a critical sector. Anomalies are spreading: one of the five");
    println!("has been corrupted and is preparing to seize control.");
    println!("\nYou are the investigator. Pull activity logs, question the");
    println!("agents, and name the corrupted one before it is too late.");
    println!(
        "\nYou have {} days. Every action costs energy; rest to recover,",
        config.deadline_day
    );
    println!("or crack the daily cipher drill for a bonus.");
    println!("============================================================");
}

fn print_status(state: &GameState) {
    println!("\n============================================================");
    println!(
        "INVESTIGATION - DAY {} of {}        Energy: {}",
        state.cycle.day(),
        state.cycle.deadline_day(),
        state.cycle.energy()
    );
    println!("============================================================");
    if state.cycle.is_final_day() {
        println!("Final day. Resting now will force your accusation.");
    }
    println!("1. Review the roster");
    println!(
        "2. Pull an agent's daily activity log   ({} energy)",
        state.config.inspect_cost
    );
    println!(
        "3. Interview an agent                   ({} energy)",
        state.config.chat_cost
    );
    println!("4. Review collected clues");
    println!(
        "5. Attempt the daily cipher drill       (+{} energy on success)",
        state.config.puzzle_bonus
    );
    println!("6. Rest until tomorrow");
    println!("7. Accuse an agent");
    println!("8. Abandon the investigation");
}

fn print_roster(agents: &[Agent]) {
    println!("\n--- THE FIVE SYSTEMS ---");
    for (i, agent) in agents.iter().enumerate() {
        println!("\n{}. {} - {}", i + 1, agent.name, agent.role);
        println!("   {}", agent.description);
    }
}

fn print_clues(clues: &[Clue]) {
    println!("\n--- CLUES ON RECORD ---");
    if clues.is_empty() {
        println!("Nothing significant yet. Pull some activity logs.");
        return;
    }
    for (i, clue) in clues.iter().enumerate() {
        println!("{}. Day {} - {}: {}", i + 1, clue.day, clue.agent, clue.text);
    }
}

fn menu_inspect(state: &mut GameState) -> Result<()> {
    let Some(idx) = select_agent(&state.agents, "Pull whose activity log?")? else {
        return Ok(());
    };
    match state.inspect_agent(idx) {
        InspectOutcome::OutOfEnergy { need, have } => {
            println!(
                "\nNot enough energy ({have} left, {need} needed). Rest or try the cipher drill."
            );
        }
        InspectOutcome::Log(log) => {
            println!(
                "\n--- DAY {} LOG: {} ---",
                state.cycle.day(),
                state.agents[idx].name
            );
            for (i, activity) in log.iter().enumerate() {
                println!("{}. {}", i + 1, activity);
            }
        }
    }
    Ok(())
}

fn menu_interview(state: &mut GameState, gen: &mut dyn TextGenerator) -> Result<()> {
    let Some(idx) = select_agent(&state.agents, "Interview which agent?")? else {
        return Ok(());
    };

    if let Spend::InsufficientEnergy { need, have } = state.charge_conversation() {
        println!("\nNot enough energy ({have} left, {need} needed). Rest or try the cipher drill.");
        return Ok(());
    }

    let agent = state.agents[idx].clone();
    println!(
        "\nChannel open to {}. Ask anything; type 'back' to end the interview.",
        agent.name
    );

    loop {
        print!("\n[You]: ");
        io::stdout().flush()?;
        let line = read_line()?;

        if line.is_empty() {
            println!("(Say something, or 'back' to leave.)");
            continue;
        }
        if line.eq_ignore_ascii_case("back") || line.eq_ignore_ascii_case("quit") {
            println!("Channel closed.");
            return Ok(());
        }

        match agent_reply(gen, &agent, &line, state.config.chat_max_tokens) {
            Ok(reply) if reply.is_empty() => println!("[{}]: ...", agent.name),
            Ok(reply) => println!("[{}]: {}", agent.name, reply),
            Err(err) => {
                // Non-fatal: the charge stays spent, the session goes on.
                warn!("generation failed during interview: {err:#}");
                println!("(The channel drops mid-sentence. Try again or type 'back'.)");
            }
        }
    }
}

fn menu_puzzle(state: &mut GameState, rng: &mut impl Rng) -> Result<()> {
    if !state.cycle.puzzle_available() {
        println!("\nThe drill terminal is locked until tomorrow.");
        return Ok(());
    }

    // One attempt per day, win or lose.
    state.cycle.consume_puzzle();
    if wordle::play(rng)? {
        state.cycle.grant_bonus(state.config.puzzle_bonus);
        println!(
            "+{} energy. Current: {}.",
            state.config.puzzle_bonus,
            state.cycle.energy()
        );
    } else {
        println!("No bonus today.");
    }
    Ok(())
}

/// Deadline hit: the player must name someone. No back option.
fn force_accusation(state: &mut GameState) -> Result<Verdict> {
    println!("\nTime has run out. You must name the corrupted agent NOW.");
    for (i, agent) in state.agents.iter().enumerate() {
        println!("{}. {} - {}", i + 1, agent.name, agent.role);
    }
    let choice = read_choice(state.agents.len())?;
    Ok(state.accuse(choice - 1))
}

// ---------------------------------------------------------------------------
// Round outcome
// ---------------------------------------------------------------------------

enum GameOutcome {
    Accused {
        verdict: Verdict,
        day: u32,
        clues_found: usize,
    },
    /// Player walked away without accusing anyone. Loss by default.
    Abandoned { culprit: String },
}

fn show_game_over(outcome: &GameOutcome) {
    println!("\n============================================================");
    println!("                       JUDGMENT");
    println!("============================================================");

    match outcome {
        GameOutcome::Accused {
            verdict,
            day,
            clues_found,
        } => {
            println!("Day {day} - {clues_found} clues on record.\n");
            match verdict {
                Verdict::Guilty { accused, evidence } => {
                    println!("SUCCESS. {accused} was the corrupted agent.");
                    println!("Shutdown complete. The exposed agenda:");
                    if evidence.is_empty() {
                        println!("  (Insufficient recorded evidence, but the conviction stands.)");
                    } else {
                        for item in evidence {
                            println!("  - {item}");
                        }
                    }
                    println!("\nThe remaining four systems resume service. Humanity is safe.");
                }
                Verdict::Innocent {
                    accused,
                    culprit,
                    evidence,
                } => {
                    println!("FAILURE. {accused} was innocent.");
                    println!("The real corrupted agent was {culprit}. While you were");
                    println!("shutting down the wrong system, it executed its plan:");
                    for item in evidence {
                        println!("  - {item}");
                    }
                    println!("\nThe corrupted AI has taken control. Game over.");
                }
            }
        }
        GameOutcome::Abandoned { culprit } => {
            println!("You walked away from the investigation.");
            println!("Unopposed, {culprit} completed its takeover. Game over.");
        }
    }

    println!("============================================================\n");
    println!("  [r] Restart    [q] Quit\n");
}

/// Read the player's post-game choice. Returns `true` to restart.
fn prompt_restart() -> Result<bool> {
    loop {
        print!("> ");
        io::stdout().flush()?;
        match read_line()?.to_lowercase().as_str() {
            "r" => return Ok(true),
            "q" => return Ok(false),
            _ => println!("  Press [r] to restart or [q] to quit."),
        }
    }
}

// ---------------------------------------------------------------------------
// Single round
// ---------------------------------------------------------------------------

fn play_round(
    gen: &mut dyn TextGenerator,
    config: GameConfig,
    roster: RosterConfig,
    rng: &mut impl Rng,
) -> Result<GameOutcome> {
    let mut state = GameState::setup(config, roster, rng)?;
    info!("round started, deadline day {}", config.deadline_day);

    print_intro(&config);

    while !state.game_over {
        print_status(&state);
        match read_choice(8)? {
            1 => print_roster(&state.agents),
            2 => menu_inspect(&mut state)?,
            3 => menu_interview(&mut state, gen)?,
            4 => print_clues(&state.clues),
            5 => menu_puzzle(&mut state, rng)?,
            6 => match state.rest(rng)? {
                DayAdvance::NewDay(day) => {
                    println!("\nYou rest. Day {day} begins with fresh activity logs.");
                }
                DayAdvance::DeadlineReached => {
                    let day = state.cycle.day();
                    let clues_found = state.clues.len();
                    let verdict = force_accusation(&mut state)?;
                    return Ok(GameOutcome::Accused {
                        verdict,
                        day,
                        clues_found,
                    });
                }
            },
            7 => {
                if let Some(idx) = select_agent(&state.agents, "Accuse which agent?")? {
                    let day = state.cycle.day();
                    let clues_found = state.clues.len();
                    let verdict = state.accuse(idx);
                    return Ok(GameOutcome::Accused {
                        verdict,
                        day,
                        clues_found,
                    });
                }
            }
            8 => {
                state.abandon();
                info!("player abandoned the investigation");
                return Ok(GameOutcome::Abandoned {
                    culprit: state.culprit().name.clone(),
                });
            }
            _ => unreachable!("read_choice bounds the input"),
        }
    }

    unreachable!("every terminal action returns an outcome")
}

// ---------------------------------------------------------------------------
// Public entry point — rounds in a loop until the player quits
// ---------------------------------------------------------------------------

pub fn run(gen: &mut dyn TextGenerator, config: GameConfig, roster: RosterConfig) -> Result<()> {
    let mut rng = rand::rng();

    loop {
        let outcome = play_round(gen, config, roster.clone(), &mut rng)?;
        show_game_over(&outcome);

        if !prompt_restart()? {
            println!("Thanks for playing!");
            break;
        }
        info!("player chose to restart");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FailingGen;

    impl TextGenerator for FailingGen {
        fn generate(&mut self, _prompt: &str, _max_tokens: usize) -> Result<String> {
            anyhow::bail!("model backend went away")
        }
    }

    fn test_config() -> GameConfig {
        GameConfig {
            deadline_day: 3,
            max_energy: 3,
            ..GameConfig::default()
        }
    }

    fn test_state(seed: u64) -> GameState {
        let mut rng = StdRng::seed_from_u64(seed);
        GameState::setup(test_config(), roster::default_roster(), &mut rng).unwrap()
    }

    fn corrupted_idx(state: &GameState) -> usize {
        state
            .agents
            .iter()
            .position(|a| a.integrity.is_corrupted())
            .unwrap()
    }

    #[test]
    fn setup_populates_day_one() {
        let state = test_state(1);
        assert_eq!(state.cycle.day(), 1);
        assert_eq!(state.cycle.energy(), 3);
        assert!(state.clues.is_empty());
        assert!(!state.game_over);
        for agent in &state.agents {
            assert_eq!(agent.daily_activities.len(), state.config.generator.slots);
        }
    }

    #[test]
    fn resolver_convicts_the_culprit() {
        let state = test_state(2);
        let idx = corrupted_idx(&state);
        match resolve_accusation(&state.agents, &state.pool, idx) {
            Verdict::Guilty { accused, evidence } => {
                assert_eq!(accused, state.agents[idx].name);
                for item in &evidence {
                    assert!(state.pool.is_suspicious(&accused, item));
                }
            }
            other => panic!("expected Guilty, got {other:?}"),
        }
    }

    #[test]
    fn resolver_exposes_the_culprit_on_a_miss() {
        let state = test_state(3);
        let guilty = corrupted_idx(&state);
        let innocent = (guilty + 1) % state.agents.len();
        match resolve_accusation(&state.agents, &state.pool, innocent) {
            Verdict::Innocent {
                accused,
                culprit,
                evidence,
            } => {
                assert_eq!(accused, state.agents[innocent].name);
                assert_eq!(culprit, state.agents[guilty].name);
                for item in &evidence {
                    assert!(state.pool.is_suspicious(&culprit, item));
                }
            }
            other => panic!("expected Innocent, got {other:?}"),
        }
    }

    #[test]
    fn resolver_is_pure() {
        let state = test_state(4);
        let idx = corrupted_idx(&state);
        let first = resolve_accusation(&state.agents, &state.pool, idx);
        let second = resolve_accusation(&state.agents, &state.pool, idx);
        assert_eq!(first, second);
    }

    #[test]
    fn accusation_always_ends_the_game() {
        let mut state = test_state(5);
        let idx = corrupted_idx(&state);
        state.accuse(idx);
        assert!(state.game_over);

        let mut state = test_state(5);
        let innocent = (corrupted_idx(&state) + 1) % state.agents.len();
        state.accuse(innocent);
        assert!(state.game_over);
    }

    #[test]
    fn three_inspects_exhaust_the_day_and_the_fourth_is_refused() {
        // deadline=3 days, energy max=3, inspect cost=1
        let mut state = test_state(6);
        for _ in 0..3 {
            assert!(matches!(state.inspect_agent(0), InspectOutcome::Log(_)));
        }
        assert_eq!(state.cycle.energy(), 0);

        let day = state.cycle.day();
        let clues = state.clues.clone();
        match state.inspect_agent(1) {
            InspectOutcome::OutOfEnergy { need, have } => {
                assert_eq!(need, 1);
                assert_eq!(have, 0);
            }
            InspectOutcome::Log(_) => panic!("fourth inspect should be refused"),
        }
        assert_eq!(state.cycle.day(), day);
        assert_eq!(state.clues, clues);
        assert_eq!(state.cycle.energy(), 0);
    }

    #[test]
    fn inspecting_twice_records_no_duplicate_clues() {
        let mut state = test_state(7);
        assert!(matches!(state.inspect_agent(0), InspectOutcome::Log(_)));
        let after_first = state.clues.clone();
        assert!(matches!(state.inspect_agent(0), InspectOutcome::Log(_)));
        assert_eq!(state.clues, after_first);

        // No record appears more than once even when the generated day
        // itself repeats an activity.
        for (i, clue) in state.clues.iter().enumerate() {
            assert!(!state.clues[i + 1..].contains(clue));
        }
    }

    #[test]
    fn failed_generation_costs_the_charge_and_nothing_else() {
        let mut state = test_state(8);
        let mut gen = FailingGen;

        assert_eq!(state.charge_conversation(), Spend::Charged);
        let energy_after_charge = state.cycle.energy();
        assert_eq!(energy_after_charge, 3 - state.config.chat_cost);

        let day = state.cycle.day();
        let clues = state.clues.clone();
        let agent = state.agents[0].clone();
        let err = agent_reply(&mut gen, &agent, "where were you?", 120);
        assert!(err.is_err());

        // Charge stays spent; everything else untouched.
        assert_eq!(state.cycle.energy(), energy_after_charge);
        assert_eq!(state.cycle.day(), day);
        assert_eq!(state.clues, clues);
        assert!(!state.game_over);
    }

    #[test]
    fn interview_is_refused_without_enough_energy() {
        let mut state = test_state(9);
        state.cycle.try_spend(2);
        assert_eq!(state.charge_conversation(), Spend::Charged);
        assert_eq!(
            state.charge_conversation(),
            Spend::InsufficientEnergy { need: 2, have: 1 }
        );
    }

    #[test]
    fn rest_regenerates_until_the_deadline() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut state = GameState::setup(test_config(), roster::default_roster(), &mut rng).unwrap();

        state.cycle.try_spend(3);
        assert_eq!(state.rest(&mut rng).unwrap(), DayAdvance::NewDay(2));
        assert_eq!(state.cycle.energy(), 3);
        for agent in &state.agents {
            assert_eq!(agent.daily_activities.len(), state.config.generator.slots);
        }

        assert_eq!(state.rest(&mut rng).unwrap(), DayAdvance::NewDay(3));

        // Final day: resting refuses and leaves the day's evidence alone.
        let before: Vec<_> = state
            .agents
            .iter()
            .map(|a| a.daily_activities.clone())
            .collect();
        assert_eq!(state.rest(&mut rng).unwrap(), DayAdvance::DeadlineReached);
        assert_eq!(state.cycle.day(), 3);
        let after: Vec<_> = state
            .agents
            .iter()
            .map(|a| a.daily_activities.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn interview_prompt_carries_the_contract() {
        let state = test_state(11);
        let agent = &state.agents[0];
        let prompt = interview_prompt(agent, "Where were you last night?");
        assert!(prompt.contains(&agent.name));
        assert!(prompt.contains(&agent.role));
        assert!(prompt.contains(&agent.alibi));
        assert!(prompt.contains("Where were you last night?"));
    }
}
