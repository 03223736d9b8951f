//! The card table.
//!
//! Pure data: each function builds an unregistered prototype (id
//! [`CardId::UNASSIGNED`](crate::core::CardId::UNASSIGNED)); cards get a real
//! id when a reducer registers them with a game.

use crate::core::{Card, CardCondition, CardEffect, CardKind, Power, TargetKind, UpgradeSpec};

/// Names of all obtainable cards, for reward pools.
pub const ALL_CARDS: &[&str] = &[
    "Defend",
    "Strike",
    "Bash",
    "Clash",
    "Cleave",
    "Iron Wave",
    "Sucker Punch",
    "Thunderclap",
    "Flourish",
    "Summer of Sam",
    "Body Slam",
];

/// Build a card prototype by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Card> {
    let card = match name {
        "Defend" => Card::new("Defend", CardKind::Skill, 1, TargetKind::Player)
            .with_block(5)
            .with_description("Gain 5 Block.")
            .with_upgrade(UpgradeSpec {
                block: Some(8),
                description: Some("Gain 8 Block.".into()),
                ..UpgradeSpec::default()
            }),
        "Strike" => Card::new("Strike", CardKind::Attack, 1, TargetKind::Enemy)
            .with_damage(6)
            .with_description("Deal 6 Damage.")
            .with_upgrade(UpgradeSpec {
                damage: Some(9),
                description: Some("Deal 9 Damage.".into()),
                ..UpgradeSpec::default()
            }),
        "Bash" => Card::new("Bash", CardKind::Attack, 2, TargetKind::Enemy)
            .with_damage(8)
            .with_power(Power::Vulnerable, 2)
            .with_description("Deal 8 damage. Apply 2 Vulnerable.")
            .with_upgrade(UpgradeSpec {
                damage: Some(10),
                powers: Some(vec![(Power::Vulnerable, 3)]),
                description: Some("Deal 10 Damage. Apply 3 Vulnerable.".into()),
                ..UpgradeSpec::default()
            }),
        "Clash" => Card::new("Clash", CardKind::Attack, 0, TargetKind::Enemy)
            .with_damage(14)
            .with_condition(CardCondition::OnlyCardKind(CardKind::Attack))
            .with_description(
                "Can only be played if every card in your hand is an Attack. Deal 14 damage.",
            )
            .with_upgrade(UpgradeSpec {
                damage: Some(17),
                description: Some(
                    "Can only be played if every card in your hand is an Attack. Deal 17 damage."
                        .into(),
                ),
                ..UpgradeSpec::default()
            }),
        "Cleave" => Card::new("Cleave", CardKind::Attack, 1, TargetKind::AllEnemies)
            .with_damage(8)
            .with_description("Deal 8 damage to all enemies.")
            .with_upgrade(UpgradeSpec {
                damage: Some(11),
                description: Some("Deal 11 Damage to all enemies.".into()),
                ..UpgradeSpec::default()
            }),
        "Iron Wave" => Card::new("Iron Wave", CardKind::Attack, 1, TargetKind::Enemy)
            .with_damage(5)
            .with_block(5)
            .with_description("Deal 5 damage. Gain 5 Block.")
            .with_upgrade(UpgradeSpec {
                damage: Some(7),
                block: Some(7),
                description: Some("Deal 7 Damage. Gain 7 Block.".into()),
                ..UpgradeSpec::default()
            }),
        "Sucker Punch" => Card::new("Sucker Punch", CardKind::Attack, 1, TargetKind::Enemy)
            .with_damage(7)
            .with_power(Power::Weak, 1)
            .with_description("Deal 7 Damage. Apply 1 Weak.")
            .with_upgrade(UpgradeSpec {
                damage: Some(8),
                powers: Some(vec![(Power::Weak, 2)]),
                description: Some("Deal 8 Damage. Apply 2 Weak.".into()),
                ..UpgradeSpec::default()
            }),
        "Thunderclap" => Card::new("Thunderclap", CardKind::Attack, 1, TargetKind::AllEnemies)
            .with_damage(4)
            .with_power(Power::Vulnerable, 1)
            .with_description("Deal 4 Damage. Apply 1 Vulnerable to all enemies.")
            .with_upgrade(UpgradeSpec {
                damage: Some(6),
                description: Some("Deal 6 Damage. Apply 1 Vulnerable to all enemies.".into()),
                ..UpgradeSpec::default()
            }),
        "Flourish" => Card::new("Flourish", CardKind::Skill, 2, TargetKind::Player)
            .with_power(Power::Regen, 5)
            .with_condition(CardCondition::HealthBelowPercent(50))
            .with_description("Gain 5 Regen. Can only be played if your health is below 50%.")
            .with_upgrade(UpgradeSpec {
                conditions: Some(vec![CardCondition::HealthBelowPercent(75)]),
                description: Some(
                    "Gain 5 Regen. Can only be played if your health is below 75%.".into(),
                ),
                ..UpgradeSpec::default()
            }),
        "Summer of Sam" => Card::new("Summer of Sam", CardKind::Skill, 1, TargetKind::Player)
            .with_effect(CardEffect::AddHealth { amount: 1 })
            .with_effect(CardEffect::DrawCards {
                amount: 2,
                conditions: vec![CardCondition::HealthBelowPercent(50)],
            })
            .with_description("Gain 1 Health. Draw 2 Cards if your health is below 50%.")
            .with_upgrade(UpgradeSpec {
                effects: Some(vec![
                    CardEffect::AddHealth { amount: 2 },
                    CardEffect::DrawCards {
                        amount: 2,
                        conditions: vec![CardCondition::HealthBelowPercent(50)],
                    },
                ]),
                description: Some(
                    "Gain 2 Health. Draw 2 Cards if your health is below 50%.".into(),
                ),
                ..UpgradeSpec::default()
            }),
        "Body Slam" => Card::new("Body Slam", CardKind::Attack, 1, TargetKind::Enemy)
            .with_effect(CardEffect::DealDamageEqualToBlock)
            .with_description("Deal Damage equal to your Block.")
            .with_upgrade(UpgradeSpec {
                energy: Some(0),
                ..UpgradeSpec::default()
            }),
        _ => return None,
    };
    Some(card)
}

/// The fixed starting collection: 4 Defend, 5 Strike, 1 Bash, in that order.
#[must_use]
pub fn starter_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(10);
    for _ in 0..4 {
        deck.extend(by_name("Defend"));
    }
    for _ in 0..5 {
        deck.extend(by_name("Strike"));
    }
    deck.extend(by_name("Bash"));
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    #[test]
    fn test_every_listed_card_builds() {
        for name in ALL_CARDS {
            let card = by_name(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(card.name, *name);
            assert_eq!(card.id, CardId::UNASSIGNED);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(by_name("Perfected Strike").is_none());
    }

    #[test]
    fn test_starter_deck_composition() {
        let deck = starter_deck();
        assert_eq!(deck.len(), 10);

        let names: Vec<&str> = deck.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Defend", "Defend", "Defend", "Defend", "Strike", "Strike", "Strike", "Strike",
                "Strike", "Bash",
            ]
        );
    }

    #[test]
    fn test_bash_applies_vulnerable() {
        let bash = by_name("Bash").unwrap();
        assert_eq!(bash.energy, 2);
        assert_eq!(bash.damage, Some(8));
        assert_eq!(bash.powers.stacks(Power::Vulnerable), 2);
    }

    #[test]
    fn test_body_slam_upgrade_is_free() {
        let mut card = by_name("Body Slam").unwrap();
        card.upgrade();
        assert_eq!(card.energy, 0);
        assert_eq!(card.effects, vec![CardEffect::DealDamageEqualToBlock]);
    }
}
