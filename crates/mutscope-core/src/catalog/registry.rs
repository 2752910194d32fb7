//! Embedded mutator data.
//!
//! The registry lists every standard co-op mutator in the order the custom
//! mutation dialog lays them out. Mutators that are never offered there
//! (seasonal, brutal+ only, host scripted) are listed in the deny-list and
//! dropped when the catalog is built.

/// Standard mutators in dialog order, deny-listed entries included.
///
/// The entries listed in [`PLACEHOLDER_MUTATORS`] are placeholders that pad
/// the last panel of the grid. They have not been checked against a game
/// client, so mutators resolved from those buttons are unreliable; supply a
/// tables file with the client's layout to replace them.
pub const MUTATOR_REGISTRY: &[&str] = &[
    "Barrier",
    "Black Death",
    "Speed Freaks",
    "Walking Infested",
    "Slim Pickings",
    "Time Warp",
    "Outbreak",
    "Darkness",
    "Mag-nificent",
    "Mutually Assured Destruction",
    "Shortsighted",
    "Life Leech",
    "Just Die!",
    "Avenger",
    "Kill Bots",
    "Alien Incubation",
    "Twister",
    "Diffusion",
    "Fear",
    "Self Destruction",
    "Polarity",
    "Inspiration",
    "Micro Transactions",
    "Power Overwhelming",
    "Double-Edged",
    "Missile Command",
    "Vertigo",
    "Minesweeper",
    "Going Nuclear",
    "Temporal Field",
    "Evasive Maneuvers",
    "Photon Overload",
    "Void Rifts",
    "Orbital Strike",
    "Laser Drill",
    "Eminent Domain",
    "Concussive Attacks",
    "Fatal Attraction",
    "Afraid of the Dark",
    "Trick or Treat",
    "Chaos Studios",
    "Stone Zealots",
    "Purifier Beam",
    "Blizzard",
    "Lava Burst",
    "We Move Unseen",
    "Boom Bots",
    "Hardened Will",
    "Propagators",
    "Sharing Is Caring",
    "Gift Exchange",
    "Naughty List",
    "Extreme Caution",
    "Insubordination",
    "Fireworks",
    "Lucky Envelopes",
    "Nap Time",
    "Undying Evil",
    "Turkey Shoot",
    "Sluggishness",
    "Void Reanimators",
    "Moment of Silence",
    "Heroes from the Storm",
    "Aggressive Deployment",
    "Transmutation",
    // Placeholders from here on, see `PLACEHOLDER_MUTATORS`
    "Long Range",
    "Scorched Earth",
    "Train of Terror",
    "Alarak's Revenge",
    "Mineral Shields",
    "Spawn More Overlords",
    "Unstable Terrazine",
    "Supreme Leader",
    "Wrath of the Golden Armada",
    "Great Wall",
];

/// Unverified registry entries padding the grid to 60 buttons.
pub const PLACEHOLDER_MUTATORS: &[&str] = &[
    "Long Range",
    "Scorched Earth",
    "Train of Terror",
    "Alarak's Revenge",
    "Mineral Shields",
    "Spawn More Overlords",
    "Unstable Terrazine",
    "Supreme Leader",
    "Wrath of the Golden Armada",
    "Great Wall",
];

/// Mutators that never appear in the custom mutation dialog.
pub const CUSTOM_MUTATION_DENY_LIST: &[&str] = &[
    "Nap Time",
    "Stone Zealots",
    "Chaos Studios",
    "Undying Evil",
    "Afraid of the Dark",
    "Trick or Treat",
    "Turkey Shoot",
    "Sharing Is Caring",
    "Gift Exchange",
    "Naughty List",
    "Extreme Caution",
    "Insubordination",
    "Fireworks",
    "Lucky Envelopes",
    "Sluggishness",
];

/// Upgrade keys (the part after `mutatorinfo_`) and the mutator they announce.
///
/// Mutator maps grant one of these upgrades to player 0 for every active
/// mutator, including host-only ones that have no dialog button.
pub const MUTATOR_UPGRADE_IDS: &[(&str, &str)] = &[
    ("Barrier", "Barrier"),
    ("BlackDeath", "Black Death"),
    ("SpeedFreaks", "Speed Freaks"),
    ("WalkingInfested", "Walking Infested"),
    ("SlimPickings", "Slim Pickings"),
    ("TimeWarp", "Time Warp"),
    ("Outbreak", "Outbreak"),
    ("Darkness", "Darkness"),
    ("MagNificent", "Mag-nificent"),
    ("MutuallyAssuredDestruction", "Mutually Assured Destruction"),
    ("Shortsighted", "Shortsighted"),
    ("LifeLeech", "Life Leech"),
    ("JustDie", "Just Die!"),
    ("Avenger", "Avenger"),
    ("KillBots", "Kill Bots"),
    ("AlienIncubation", "Alien Incubation"),
    ("Twister", "Twister"),
    ("Diffusion", "Diffusion"),
    ("Fear", "Fear"),
    ("SelfDestruction", "Self Destruction"),
    ("Polarity", "Polarity"),
    ("Inspiration", "Inspiration"),
    ("MicroTransactions", "Micro Transactions"),
    ("PowerOverwhelming", "Power Overwhelming"),
    ("DoubleEdged", "Double-Edged"),
    ("MissileCommand", "Missile Command"),
    ("Vertigo", "Vertigo"),
    ("Minesweeper", "Minesweeper"),
    ("GoingNuclear", "Going Nuclear"),
    ("TemporalField", "Temporal Field"),
    ("EvasiveManeuvers", "Evasive Maneuvers"),
    ("PhotonOverload", "Photon Overload"),
    ("VoidRifts", "Void Rifts"),
    ("OrbitalStrike", "Orbital Strike"),
    ("LaserDrill", "Laser Drill"),
    ("EminentDomain", "Eminent Domain"),
    ("ConcussiveAttacks", "Concussive Attacks"),
    ("FatalAttraction", "Fatal Attraction"),
    ("AfraidOfTheDark", "Afraid of the Dark"),
    ("TrickOrTreat", "Trick or Treat"),
    ("ChaosStudios", "Chaos Studios"),
    ("StoneZealots", "Stone Zealots"),
    ("PurifierBeam", "Purifier Beam"),
    ("Blizzard", "Blizzard"),
    ("LavaBurst", "Lava Burst"),
    ("WeMoveUnseen", "We Move Unseen"),
    ("BoomBots", "Boom Bots"),
    ("HardenedWill", "Hardened Will"),
    ("Propagators", "Propagators"),
    ("SharingIsCaring", "Sharing Is Caring"),
    ("GiftExchange", "Gift Exchange"),
    ("NaughtyList", "Naughty List"),
    ("ExtremeCaution", "Extreme Caution"),
    ("Insubordination", "Insubordination"),
    ("Fireworks", "Fireworks"),
    ("LuckyEnvelopes", "Lucky Envelopes"),
    ("NapTime", "Nap Time"),
    ("UndyingEvil", "Undying Evil"),
    ("TurkeyShoot", "Turkey Shoot"),
    ("Sluggishness", "Sluggishness"),
    ("VoidReanimators", "Void Reanimators"),
    ("MomentOfSilence", "Moment of Silence"),
    ("HeroesFromTheStorm", "Heroes from the Storm"),
    ("AggressiveDeployment", "Aggressive Deployment"),
    ("Transmutation", "Transmutation"),
    ("LongRange", "Long Range"),
    ("ScorchedEarth", "Scorched Earth"),
    ("TrainOfTerror", "Train of Terror"),
    ("AlaraksRevenge", "Alarak's Revenge"),
    ("MineralShields", "Mineral Shields"),
    ("SpawnMoreOverlords", "Spawn More Overlords"),
    ("UnstableTerrazine", "Unstable Terrazine"),
    ("SupremeLeader", "Supreme Leader"),
    ("WrathOfTheGoldenArmada", "Wrath of the Golden Armada"),
    ("GreatWall", "Great Wall"),
    ("NightmareMode", "Nightmare Mode"),
];
