//! Round loop, purchases, rent and elimination.
//!
//! # Turn order
//! Each round, every active player in turn order:
//! 1. rolls a die and moves (lap bonus applies mid-round)
//! 2. tries to buy the property if unowned, or pays rent if another player owns it
//! 3. is eliminated immediately if their balance went negative
//!
//! The match ends after a round once a single player remains or the round cap
//! is reached.

use super::outcome::{MatchOutcome, PlayerStanding};
use crate::core::constants::{DIE_MAX, DIE_MIN};
use crate::core::error::{Result, SimError};
use crate::player::{Player, PlayerId};
use crate::property::Property;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Roll a fair six-sided die.
pub fn roll_die(rng: &mut impl Rng) -> usize {
    rng.gen_range(DIE_MIN..=DIE_MAX)
}

/// What happened on the space a player landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingAction {
    Purchased { price: f64 },
    Declined,
    PaidRent { owner: PlayerId, rent: f64 },
    OwnProperty,
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub roll: usize,
    pub lap_completed: bool,
    pub position: usize,
    pub action: LandingAction,
    pub eliminated: bool,
}

/// One game between a fixed roster on a fixed board.
#[derive(Debug, Clone)]
pub struct Match {
    /// Active players in turn order
    players: Vec<Player>,
    /// Players knocked out, in elimination order
    eliminated: Vec<Player>,
    properties: Vec<Property>,
    rounds: u32,
    max_rounds: u32,
    winner: Option<PlayerId>,
}

impl Match {
    /// Create a match, rejecting an empty roster, duplicate ids, an empty
    /// board or a zero round cap.
    pub fn new(players: Vec<Player>, properties: Vec<Property>, max_rounds: u32) -> Result<Self> {
        if players.is_empty() {
            return Err(SimError::NoPlayers);
        }
        if properties.is_empty() {
            return Err(SimError::EmptyBoard);
        }
        if max_rounds == 0 {
            return Err(SimError::InvalidConfig(
                "round cap must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.id) {
                return Err(SimError::DuplicatePlayerId(player.id));
            }
            if player.position >= properties.len() {
                return Err(SimError::InvalidConfig(format!(
                    "player {} starts off the board at {}",
                    player.id, player.position
                )));
            }
        }

        debug!(
            players = players.len(),
            properties = properties.len(),
            "Created match"
        );

        Ok(Self {
            players,
            eliminated: Vec::new(),
            properties,
            rounds: 0,
            max_rounds,
            winner: None,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn board_size(&self) -> usize {
        self.properties.len()
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Index of an active player by id
    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn is_finished(&self) -> bool {
        self.players.len() <= 1 || self.rounds >= self.max_rounds
    }

    /// Round cap reached with more than one active player.
    pub fn is_timeout(&self) -> bool {
        self.rounds >= self.max_rounds && self.players.len() > 1
    }

    /// Play rounds until the match terminates and return its outcome.
    pub fn play(&mut self, rng: &mut impl Rng) -> Result<MatchOutcome> {
        warn!("*** Match started ***");

        while !self.is_finished() {
            self.play_round(rng);
        }

        if self.is_timeout() {
            warn!(
                max_rounds = self.max_rounds,
                "The game has reached the limit of rounds"
            );
        }
        warn!("*** End of match ***");

        self.finish()
    }

    /// Give every active player one turn, then advance the round counter.
    pub fn play_round(&mut self, rng: &mut impl Rng) {
        let mut index = 0;
        while index < self.players.len() {
            let roll = roll_die(rng);
            let report = self.take_turn(index, roll, rng);
            // An eliminated player is removed in place, so the next player
            // now sits at the same index.
            if !report.eliminated {
                index += 1;
            }
        }

        self.end_round();
    }

    /// Close the current round once every active player has taken a turn.
    pub fn end_round(&mut self) {
        self.rounds += 1;
        info!(round = self.rounds, "Round finished");
    }

    /// Play one turn for the active player at `index` with a given die roll.
    ///
    /// `rng` is only consulted by purchase policies that need it.
    pub fn take_turn(&mut self, index: usize, roll: usize, rng: &mut impl Rng) -> TurnReport {
        let board_size = self.board_size();
        let player = &mut self.players[index];
        let id = player.id;
        let lap_completed = player.move_spaces(roll, board_size);
        let position = player.position;

        debug!(player = %id, roll, position, "Moved");
        if lap_completed {
            info!(
                player = %id,
                laps = player.laps,
                balance = player.balance,
                "Completed lap"
            );
        }

        let action = match self.properties[position].owner() {
            None => {
                if self.try_purchase(index, position, rng) {
                    LandingAction::Purchased {
                        price: self.properties[position].price(),
                    }
                } else {
                    LandingAction::Declined
                }
            }
            Some(owner) if owner == id => {
                info!(player = %id, "Landed on own property");
                LandingAction::OwnProperty
            }
            Some(owner) => {
                let rent = self.properties[position].rent();
                if self.pay_rent(index, position) {
                    LandingAction::PaidRent { owner, rent }
                } else {
                    LandingAction::OwnProperty
                }
            }
        };

        let eliminated = self.players[index].is_balance_negative();
        if eliminated {
            self.eliminate(index);
        }

        TurnReport {
            player: id,
            roll,
            lap_completed,
            position,
            action,
            eliminated,
        }
    }

    /// Unowned and affordable; the policy decides the rest.
    pub fn can_purchase(&self, player_index: usize, property_index: usize) -> bool {
        let property = &self.properties[property_index];
        property.has_no_owner() && self.players[player_index].can_afford(property.price())
    }

    /// Attempt a purchase. On success the price is debited and ownership
    /// assigned; otherwise nothing changes.
    pub fn try_purchase(
        &mut self,
        player_index: usize,
        property_index: usize,
        rng: &mut impl Rng,
    ) -> bool {
        let buy = self.can_purchase(player_index, property_index) && {
            let player = &self.players[player_index];
            player
                .policy
                .decide(&self.properties[property_index], player, rng)
        };

        let player = &mut self.players[player_index];
        if buy {
            let property = &mut self.properties[property_index];
            property.set_owner(player.id);
            player.balance -= property.price();
            info!(
                player = %player.id,
                price = property.price(),
                rent = property.rent(),
                balance = player.balance,
                "Purchased property"
            );
        } else {
            info!(player = %player.id, balance = player.balance, "Did not buy");
        }
        buy
    }

    /// Move rent from the tenant to the property's owner.
    ///
    /// Returns false without any transfer if the property is unowned, owned by
    /// the tenant, or owned by a player who is no longer active.
    pub fn pay_rent(&mut self, tenant_index: usize, property_index: usize) -> bool {
        let property = &self.properties[property_index];
        let tenant_id = self.players[tenant_index].id;

        let owner_index = match property.owner() {
            Some(owner) if owner != tenant_id => match self.position_of(owner) {
                Some(i) => i,
                None => return false,
            },
            _ => return false,
        };

        let rent = property.rent();
        self.players[tenant_index].balance -= rent;
        self.players[owner_index].balance += rent;

        info!(
            tenant = %tenant_id,
            owner = %self.players[owner_index].id,
            rent,
            balance = self.players[tenant_index].balance,
            "Paid rent"
        );
        true
    }

    /// Release every property owned by the player at `index` and move them to
    /// the eliminated list.
    pub fn eliminate(&mut self, index: usize) {
        let player = self.players.remove(index);

        let mut released = 0;
        for property in self.properties.iter_mut() {
            if property.is_owned_by(player.id) {
                property.clear_owner();
                released += 1;
            }
        }

        info!(
            player = %player.id,
            released,
            balance = player.balance,
            "Player eliminated"
        );
        self.eliminated.push(player);
    }

    /// Highest balance wins, then most laps; remaining ties go to the first
    /// player in turn order.
    pub fn select_winner(&self) -> Option<&Player> {
        let mut best: Option<&Player> = None;
        for player in &self.players {
            let better = match best {
                None => true,
                Some(b) => (player.balance, player.laps) > (b.balance, b.laps),
            };
            if better {
                best = Some(player);
            }
        }
        best
    }

    /// Declare the winner and build the outcome record.
    pub fn finish(&mut self) -> Result<MatchOutcome> {
        let winner = self.select_winner().ok_or(SimError::NoSurvivors)?;
        let (winner_id, winner_policy) = (winner.id, winner.policy);
        warn!("*** THE WINNER IS: {} ***", winner);
        self.winner = Some(winner_id);

        let mut standings: Vec<PlayerStanding> = self
            .players
            .iter()
            .map(|p| PlayerStanding::from_player(p, false))
            .chain(
                self.eliminated
                    .iter()
                    .map(|p| PlayerStanding::from_player(p, true)),
            )
            .collect();
        standings.sort_by_key(|s| s.id);

        Ok(MatchOutcome {
            rounds: self.rounds,
            timeout: self.is_timeout(),
            winner: winner_id,
            winner_policy,
            standings,
        })
    }
}
