use anyhow::{ensure, Context, Result};
use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::game::roster::{ActivityPool, Agent, AgentCatalog, Integrity};

// ---------------------------------------------------------------------------
// Generator configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Activities per agent per day.
    pub slots: usize,
    /// Probability that any one slot is drawn from the suspicious catalog.
    /// Identical for corrupted and clean agents, so per-day suspicious
    /// counts alone do not identify the culprit.
    pub suspicious_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            slots: 5,
            suspicious_rate: 0.35,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.slots >= 1, "daily slot count must be at least 1");
        ensure!(
            (0.0..=1.0).contains(&self.suspicious_rate),
            "suspicious rate {} is outside [0, 1]",
            self.suspicious_rate
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Daily generation
// ---------------------------------------------------------------------------

/// Replace every agent's `daily_activities` with a fresh day.
pub fn regenerate_all(
    agents: &mut [Agent],
    pool: &ActivityPool,
    cfg: GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<()> {
    for agent in agents.iter_mut() {
        let catalog = pool
            .catalog(&agent.name)
            .with_context(|| format!("no activity catalog for agent '{}'", agent.name))?;
        agent.daily_activities = daily_activities(catalog, agent.integrity, cfg, rng)?;
        debug!(
            "generated day for {}: {} activities",
            agent.name,
            agent.daily_activities.len()
        );
    }
    Ok(())
}

/// Compose one agent's day.
///
/// Each slot is independently suspicious with the configured rate, then two
/// floors are applied: a corrupted agent's day always contains at least one
/// suspicious item, and a clean agent's day always contains at least one
/// safe item. The finished day is shuffled; slot order carries no
/// information.
pub fn daily_activities(
    catalog: &AgentCatalog,
    integrity: Integrity,
    cfg: GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<Vec<String>> {
    ensure!(
        !catalog.safe.is_empty(),
        "safe catalog is empty; cannot satisfy the clean-day guarantee"
    );
    ensure!(
        !catalog.suspicious.is_empty(),
        "suspicious catalog is empty; cannot satisfy the corrupted-day guarantee"
    );

    let mut suspicious_slots = 0;
    for _ in 0..cfg.slots {
        if rng.random_bool(cfg.suspicious_rate) {
            suspicious_slots += 1;
        }
    }

    match integrity {
        Integrity::Corrupted if suspicious_slots == 0 => suspicious_slots = 1,
        Integrity::Clean if suspicious_slots == cfg.slots => suspicious_slots -= 1,
        _ => {}
    }

    let mut day = draw(&catalog.suspicious, suspicious_slots, rng);
    day.extend(draw(&catalog.safe, cfg.slots - suspicious_slots, rng));
    day.shuffle(rng);

    Ok(day)
}

/// Draw `count` items: without replacement up to the catalog's size, with
/// replacement beyond it. Catalogs are small and days may repeat content.
fn draw(catalog: &[String], count: usize, rng: &mut impl Rng) -> Vec<String> {
    let mut out: Vec<String> = catalog
        .choose_multiple(rng, count.min(catalog.len()))
        .cloned()
        .collect();
    while out.len() < count {
        let item = catalog.choose(rng).expect("catalog checked non-empty");
        out.push(item.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::roster::{assign_corruption, default_roster};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> AgentCatalog {
        AgentCatalog {
            safe: vec!["s1".into(), "s2".into(), "s3".into()],
            suspicious: vec!["x1".into(), "x2".into(), "x3".into()],
        }
    }

    #[test]
    fn floors_hold_across_many_days() {
        let (mut agents, pool) = default_roster().build().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        assign_corruption(&mut agents, &mut rng);
        let cfg = GeneratorConfig::default();

        for _day in 0..100 {
            regenerate_all(&mut agents, &pool, cfg, &mut rng).unwrap();
            for agent in &agents {
                assert_eq!(agent.daily_activities.len(), cfg.slots);
                let suspicious = agent
                    .daily_activities
                    .iter()
                    .filter(|a| pool.is_suspicious(&agent.name, a))
                    .count();
                if agent.integrity.is_corrupted() {
                    assert!(suspicious >= 1, "corrupted day with no suspicious item");
                } else {
                    assert!(
                        suspicious < cfg.slots,
                        "clean agent {} drew an all-suspicious day",
                        agent.name
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_same_days() {
        let cfg = GeneratorConfig::default();
        let run = |seed: u64| {
            let (mut agents, pool) = default_roster().build().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            assign_corruption(&mut agents, &mut rng);
            let mut days = Vec::new();
            for _ in 0..10 {
                regenerate_all(&mut agents, &pool, cfg, &mut rng).unwrap();
                days.push(
                    agents
                        .iter()
                        .map(|a| a.daily_activities.clone())
                        .collect::<Vec<_>>(),
                );
            }
            days
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn extreme_rates_respect_floors() {
        let cat = catalog();
        let mut rng = StdRng::seed_from_u64(5);

        let all_suspicious = GeneratorConfig {
            slots: 5,
            suspicious_rate: 1.0,
        };
        let day = daily_activities(&cat, Integrity::Clean, all_suspicious, &mut rng).unwrap();
        assert!(day.iter().any(|a| cat.safe.contains(a)));

        let never_suspicious = GeneratorConfig {
            slots: 5,
            suspicious_rate: 0.0,
        };
        let day = daily_activities(&cat, Integrity::Corrupted, never_suspicious, &mut rng).unwrap();
        assert!(day.iter().any(|a| cat.suspicious.contains(a)));
    }

    #[test]
    fn small_catalogs_fill_by_reuse() {
        let cat = AgentCatalog {
            safe: vec!["only-safe".into()],
            suspicious: vec!["only-sus".into()],
        };
        let cfg = GeneratorConfig {
            slots: 7,
            suspicious_rate: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(9);
        let day = daily_activities(&cat, Integrity::Corrupted, cfg, &mut rng).unwrap();
        assert_eq!(day.len(), 7);
    }

    #[test]
    fn empty_catalog_fails_loudly() {
        let mut rng = StdRng::seed_from_u64(1);
        let no_safe = AgentCatalog {
            safe: vec![],
            suspicious: vec!["x".into()],
        };
        assert!(daily_activities(
            &no_safe,
            Integrity::Clean,
            GeneratorConfig::default(),
            &mut rng
        )
        .is_err());

        let no_sus = AgentCatalog {
            safe: vec!["s".into()],
            suspicious: vec![],
        };
        assert!(daily_activities(
            &no_sus,
            Integrity::Corrupted,
            GeneratorConfig::default(),
            &mut rng
        )
        .is_err());
    }

    #[test]
    fn bad_generator_config_is_rejected() {
        assert!(GeneratorConfig {
            slots: 0,
            suspicious_rate: 0.5
        }
        .validate()
        .is_err());
        assert!(GeneratorConfig {
            slots: 5,
            suspicious_rate: 1.5
        }
        .validate()
        .is_err());
        assert!(GeneratorConfig::default().validate().is_ok());
    }
}
