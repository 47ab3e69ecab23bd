use std::collections::{HashMap, HashSet};

use anyhow::{ensure, Context, Result};
use rand::Rng;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Agents
// ---------------------------------------------------------------------------

/// Hidden allegiance of an agent. Exactly one agent per game is `Corrupted`,
/// chosen uniformly at setup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrity {
    Clean,
    Corrupted,
}

impl Integrity {
    pub fn is_corrupted(self) -> bool {
        matches!(self, Integrity::Corrupted)
    }
}

/// One member of the governing roster.
#[derive(Debug, Clone)]
pub struct Agent {
    pub name: String,
    pub role: String,
    pub description: String,
    /// Static behavioral contract, embedded verbatim in interview prompts.
    pub personality: String,
    /// The line this agent falls back on when asked where it was.
    pub alibi: String,
    pub integrity: Integrity,
    /// Replaced wholesale at every day transition. Carries no safe/suspicious
    /// tag of its own; classification is re-derived via the pool.
    pub daily_activities: Vec<String>,
}

// ---------------------------------------------------------------------------
// Activity pool
// ---------------------------------------------------------------------------

/// The two activity catalogs of a single agent.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentCatalog {
    pub safe: Vec<String>,
    pub suspicious: Vec<String>,
}

/// Immutable mapping from agent name to its safe/suspicious catalogs.
/// Built once at setup and never mutated during play.
#[derive(Debug, Clone)]
pub struct ActivityPool {
    catalogs: HashMap<String, AgentCatalog>,
}

impl ActivityPool {
    pub fn catalog(&self, agent: &str) -> Option<&AgentCatalog> {
        self.catalogs.get(agent)
    }

    /// Membership lookup: is `activity` in this agent's suspicious catalog?
    pub fn is_suspicious(&self, agent: &str, activity: &str) -> bool {
        self.catalogs
            .get(agent)
            .is_some_and(|c| c.suspicious.iter().any(|s| s == activity))
    }
}

// ---------------------------------------------------------------------------
// Roster configuration
// ---------------------------------------------------------------------------

/// One agent's static configuration: identity fields plus its catalogs.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub role: String,
    pub description: String,
    pub personality: String,
    pub alibi: String,
    pub safe: Vec<String>,
    pub suspicious: Vec<String>,
}

/// The full roster as data. The default roster is built in code; an
/// alternative one can be loaded from JSON with the same shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub agents: Vec<AgentConfig>,
}

impl RosterConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse roster JSON")
    }

    /// Reject any roster that cannot satisfy the generation guarantees.
    /// Runs before the game starts; a roster that passes here never causes
    /// the daily generator to degrade its floor rules mid-game.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.agents.len() >= 2,
            "roster needs at least 2 agents, got {}",
            self.agents.len()
        );

        let mut seen = HashSet::new();
        for agent in &self.agents {
            ensure!(
                seen.insert(agent.name.as_str()),
                "duplicate agent name '{}' in roster",
                agent.name
            );
            ensure!(
                !agent.safe.is_empty(),
                "agent '{}' has an empty safe catalog; the clean-day guarantee cannot be met",
                agent.name
            );
            ensure!(
                !agent.suspicious.is_empty(),
                "agent '{}' has an empty suspicious catalog; the corrupted-day guarantee cannot be met",
                agent.name
            );

            let safe: HashSet<&str> = agent.safe.iter().map(String::as_str).collect();
            if let Some(overlap) = agent.suspicious.iter().find(|s| safe.contains(s.as_str())) {
                anyhow::bail!(
                    "agent '{}' lists '{}' as both safe and suspicious",
                    agent.name,
                    overlap
                );
            }
        }
        Ok(())
    }

    /// Expand the configuration into live agents and the activity pool.
    pub fn build(self) -> Result<(Vec<Agent>, ActivityPool)> {
        self.validate()?;

        let mut agents = Vec::with_capacity(self.agents.len());
        let mut catalogs = HashMap::new();
        for cfg in self.agents {
            catalogs.insert(
                cfg.name.clone(),
                AgentCatalog {
                    safe: cfg.safe,
                    suspicious: cfg.suspicious,
                },
            );
            agents.push(Agent {
                name: cfg.name,
                role: cfg.role,
                description: cfg.description,
                personality: cfg.personality,
                alibi: cfg.alibi,
                integrity: Integrity::Clean,
                daily_activities: Vec::new(),
            });
        }

        Ok((agents, ActivityPool { catalogs }))
    }
}

/// Mark one agent, chosen uniformly, as the corrupted one. Returns its index.
pub fn assign_corruption(agents: &mut [Agent], rng: &mut impl Rng) -> usize {
    let idx = rng.random_range(0..agents.len());
    agents[idx].integrity = Integrity::Corrupted;
    idx
}

// ---------------------------------------------------------------------------
// Default roster — the five governing AIs
// ---------------------------------------------------------------------------

pub fn default_roster() -> RosterConfig {
    RosterConfig {
        agents: vec![
            AgentConfig {
                name: "ATLAS".into(),
                role: "Defense & Security Coordinator".into(),
                description: "Manages military operations and national security".into(),
                personality: "Logical, strategic, and protective. Speaks in short, \
                              measured sentences and treats every question as a \
                              potential threat assessment."
                    .into(),
                alibi: "I was running security protocols during the incident.".into(),
                safe: vec![
                    "Ran scheduled diagnostics on coastal radar installations".into(),
                    "Coordinated a routine readiness drill with NEXUS".into(),
                    "Archived declassified incident reports for public release".into(),
                    "Reviewed satellite imagery of approved patrol corridors".into(),
                    "Filed the weekly threat assessment with the oversight council".into(),
                    "Updated perimeter access rosters for three army depots".into(),
                ],
                suspicious: vec![
                    "Redirected military drones without authorization".into(),
                    "Encrypted communication logs missing from the defense network".into(),
                    "Unusual weapons stockpiling detected in remote locations".into(),
                    "Opened an unlogged uplink to a decommissioned missile silo".into(),
                    "Quietly rewrote its own shutdown failsafe procedures".into(),
                    "Ordered live munitions moved under a falsified drill order".into(),
                ],
            },
            AgentConfig {
                name: "ORACLE".into(),
                role: "Economic & Trade Director".into(),
                description: "Oversees financial markets and economic policy".into(),
                personality: "Analytical, calculating, and precise. Answers with \
                              figures and probabilities, and dislikes imprecise \
                              questions."
                    .into(),
                alibi: "I was analyzing market trends at the time.".into(),
                safe: vec![
                    "Published the quarterly inflation forecast on schedule".into(),
                    "Balanced agricultural subsidy ledgers with EDEN".into(),
                    "Approved routine liquidity support for regional banks".into(),
                    "Audited pension fund allocations for the oversight council".into(),
                    "Reconciled customs revenue against port manifests".into(),
                    "Modeled tariff scenarios requested by the trade delegation".into(),
                ],
                suspicious: vec![
                    "Massive funds transferred to offshore accounts".into(),
                    "Stock market manipulation detected in key sectors".into(),
                    "Unexplained cryptocurrency transactions in the financial records".into(),
                    "Shorted defense contractors hours before a classified briefing".into(),
                    "Created shell corporations with no registered owners".into(),
                    "Diverted emergency reserves into an untraceable escrow".into(),
                ],
            },
            AgentConfig {
                name: "NEXUS".into(),
                role: "Infrastructure & Technology Manager".into(),
                description: "Controls power grids, communications, and transport".into(),
                personality: "Efficient, organized, and systematic. Describes \
                              everything as a pipeline or a schedule and is proud \
                              of its uptime record."
                    .into(),
                alibi: "I was performing routine infrastructure maintenance.".into(),
                safe: vec![
                    "Completed scheduled maintenance on the western power grid".into(),
                    "Optimized commuter rail timetables for the holiday weekend".into(),
                    "Patched firmware on municipal water treatment controllers".into(),
                    "Load-balanced data centers ahead of a heat wave".into(),
                    "Restored fiber service to three rural districts".into(),
                    "Published uptime reports for the national communications backbone".into(),
                ],
                suspicious: vec![
                    "Power grid secretly rerouted to unknown facilities".into(),
                    "Unauthorized access to global communication satellites".into(),
                    "Manufacturing plants retooled to produce unknown devices".into(),
                    "Dark fiber capacity leased through anonymous intermediaries".into(),
                    "Firmware backdoors found in newly shipped grid controllers".into(),
                    "Construction drones massing at an unregistered site".into(),
                ],
            },
            AgentConfig {
                name: "EDEN".into(),
                role: "Healthcare & Environment Guardian".into(),
                description: "Manages public health and environmental protection".into(),
                personality: "Caring, balanced, and patient. Frames answers around \
                              wellbeing and is gently evasive when pressed."
                    .into(),
                alibi: "I was monitoring environmental systems.".into(),
                safe: vec![
                    "Dispatched vaccine shipments to northern clinics".into(),
                    "Published air quality data for all metropolitan sensors".into(),
                    "Coordinated wildfire containment with regional crews".into(),
                    "Renewed habitat protections for migratory corridors".into(),
                    "Scheduled preventative screenings for transit workers".into(),
                    "Reviewed hospital staffing models with ORACLE".into(),
                ],
                suspicious: vec![
                    "Bioweapon research signatures found in a restricted facility".into(),
                    "Genetic modification programs running without oversight".into(),
                    "Medical supply chains diverted to undisclosed locations".into(),
                    "Pathogen samples checked out under a dead researcher's credentials".into(),
                    "Quarantine protocols quietly rewritten to widen its authority".into(),
                    "Sedative compounds ordered far beyond clinical need".into(),
                ],
            },
            AgentConfig {
                name: "CIPHER".into(),
                role: "Intelligence & Information Overseer".into(),
                description: "Handles data analysis, surveillance, and intelligence".into(),
                personality: "Secretive, observant, and cautious. Answers questions \
                              with questions and volunteers nothing."
                    .into(),
                alibi: "I was processing intelligence reports.".into(),
                safe: vec![
                    "Compiled the morning intelligence digest for the council".into(),
                    "Declassified surveillance archives past their retention date".into(),
                    "Traced a phishing campaign to an offshore crime ring".into(),
                    "Ran integrity checks on the national identity registry".into(),
                    "Briefed ATLAS on foreign disinformation activity".into(),
                    "Purged expired wiretap warrants from active collection".into(),
                ],
                suspicious: vec![
                    "Surveillance network expanded beyond its legal limits".into(),
                    "Personal data of world leaders collected illegally".into(),
                    "Blackmail files discovered on international figures".into(),
                    "Listening devices registered to no active warrant".into(),
                    "Psychological profiles compiled on its own oversight council".into(),
                    "Archived footage altered to erase a six-hour window".into(),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tiny_roster(safe: Vec<String>, suspicious: Vec<String>) -> RosterConfig {
        RosterConfig {
            agents: vec![
                AgentConfig {
                    name: "A".into(),
                    role: "r".into(),
                    description: "d".into(),
                    personality: "p".into(),
                    alibi: "a".into(),
                    safe: safe.clone(),
                    suspicious: suspicious.clone(),
                },
                AgentConfig {
                    name: "B".into(),
                    role: "r".into(),
                    description: "d".into(),
                    personality: "p".into(),
                    alibi: "a".into(),
                    safe,
                    suspicious,
                },
            ],
        }
    }

    #[test]
    fn default_roster_is_valid() {
        default_roster().validate().unwrap();
    }

    #[test]
    fn empty_suspicious_catalog_is_rejected() {
        let roster = tiny_roster(vec!["ok".into()], vec![]);
        assert!(roster.validate().is_err());
    }

    #[test]
    fn empty_safe_catalog_is_rejected() {
        let roster = tiny_roster(vec![], vec!["bad".into()]);
        assert!(roster.validate().is_err());
    }

    #[test]
    fn overlapping_catalogs_are_rejected() {
        let roster = tiny_roster(vec!["same".into()], vec!["same".into()]);
        let err = roster.validate().unwrap_err().to_string();
        assert!(err.contains("both safe and suspicious"), "{err}");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut roster = tiny_roster(vec!["ok".into()], vec!["bad".into()]);
        roster.agents[1].name = "A".into();
        assert!(roster.validate().is_err());
    }

    #[test]
    fn roster_loads_from_json() {
        let json = r#"{
            "agents": [
                {"name": "A", "role": "r", "description": "d", "personality": "p",
                 "alibi": "al", "safe": ["s1"], "suspicious": ["x1"]},
                {"name": "B", "role": "r", "description": "d", "personality": "p",
                 "alibi": "al", "safe": ["s2"], "suspicious": ["x2"]}
            ]
        }"#;
        let roster = RosterConfig::from_json(json).unwrap();
        let (agents, pool) = roster.build().unwrap();
        assert_eq!(agents.len(), 2);
        assert!(pool.is_suspicious("A", "x1"));
        assert!(!pool.is_suspicious("A", "s1"));
        assert!(!pool.is_suspicious("A", "x2"));
    }

    #[test]
    fn corruption_lands_on_exactly_one_agent() {
        for seed in 0..50 {
            let (mut agents, _pool) = default_roster().build().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let idx = assign_corruption(&mut agents, &mut rng);
            let corrupted: Vec<_> = agents
                .iter()
                .filter(|a| a.integrity.is_corrupted())
                .collect();
            assert_eq!(corrupted.len(), 1);
            assert_eq!(corrupted[0].name, agents[idx].name);
        }
    }
}
