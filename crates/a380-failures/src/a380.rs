//! A380 failure identifiers and the selectable failure catalog.
//!
//! [`A380Failure`] names every simulated failure the aircraft knows about.
//! [`A380_FAILURE_DEFINITIONS`] lists, in display order, the ones offered in
//! the failure-selection list. Some named failures are deliberately absent
//! from that list.
//!
//! # Example
//!
//! ```
//! use a380_failures::a380::{self, A380Failure};
//! use a380_failures::Chapter;
//!
//! let registry = a380::try_registry().unwrap();
//!
//! assert_eq!(registry.identifier_of("FmcA").unwrap().value(), 22_000);
//! assert_eq!(A380Failure::FmcA.identifier().value(), 22_000);
//!
//! let labels: Vec<_> = registry.by_chapter(Chapter::new(22)).map(|d| d.label).collect();
//! assert_eq!(labels, ["FMC-A", "FMC-B", "FMC-C"]);
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use crate::definition::{FailureDefinition, FailureEntry, FailureIdentifier};
use crate::error::{Error, Result};
use crate::registry::FailureRegistry;

/// Declares a failure enum together with its table of named entries.
///
/// Identifiers are plain data rather than enum discriminants, so a repeated
/// value still compiles and is caught when the registry is built.
macro_rules! failure_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident = $identifier:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl $name {
            /// Every failure in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Named entries in declaration order.
            pub const ENTRIES: &'static [FailureEntry] = &[
                $(FailureEntry::new(stringify!($variant), FailureIdentifier::new($identifier)),)+
            ];

            /// Symbolic name of this failure.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Numeric identifier of this failure.
            #[must_use]
            pub const fn identifier(self) -> FailureIdentifier {
                match self {
                    $(Self::$variant => FailureIdentifier::new($identifier),)+
                }
            }
        }
    };
}

failure_set! {
    /// A simulated A380 equipment failure.
    pub enum A380Failure {
        FmcA = 22000,
        FmcB = 22001,
        FmcC = 22002,

        AudioManagementUnit1 = 23000,
        AudioManagementUnit2 = 23001,
        RadioManagementPanel1 = 23002,
        RadioManagementPanel2 = 23003,
        RadioManagementPanel3 = 23004,
        Vhf1 = 23005,
        Vhf2 = 23006,
        Vhf3 = 23007,

        TransformerRectifier1 = 24000,
        TransformerRectifier2 = 24001,
        TransformerRectifierEssential = 24002,

        GreenReservoirLeak = 29000,
        YellowReservoirLeak = 29001,
        GreenReservoirAirLeak = 29002,
        YellowReservoirAirLeak = 29003,
        GreenReservoirReturnLeak = 29004,
        YellowReservoirReturnLeak = 29005,
        GreenElecPumpAOHeat = 29006,
        GreenElecPumpBOHeat = 29007,
        YellowElecPumpAOHeat = 29008,
        YellowElecPumpBOHeat = 29009,
        EnginePump1AOHeat = 29010,
        EnginePump1BOHeat = 29011,
        EnginePump2AOHeat = 29012,
        EnginePump2BOHeat = 29013,
        EnginePump3AOHeat = 29014,
        EnginePump3BOHeat = 29015,
        EnginePump4AOHeat = 29016,
        EnginePump4BOHeat = 29017,

        LeftPfdDisplay = 31000,
        RightPfdDisplay = 31001,

        LgciuPowerSupply1 = 32000,
        LgciuPowerSupply2 = 32001,
        LgciuInternalError1 = 32002,
        LgciuInternalError2 = 32003,

        GearProxSensorDamageGearUplockLeft1 = 32004,
        GearProxSensorDamageDoorDownlockRight2 = 32005,
        GearProxSensorDamageGearUplockNose1 = 32006,
        GearProxSensorDamageDoorUplockLeft2 = 32007,

        RadioAltimeter1 = 34000,
        RadioAltimeter2 = 34001,
        Transponder1 = 34002,
        Transponder2 = 34003,
    }
}

impl std::fmt::Display for A380Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for A380Failure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|failure| failure.name() == s)
            .ok_or_else(|| Error::not_found(s))
    }
}

impl TryFrom<FailureIdentifier> for A380Failure {
    type Error = Error;

    fn try_from(identifier: FailureIdentifier) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|failure| failure.identifier() == identifier)
            .ok_or(Error::UnknownIdentifier(identifier))
    }
}

const fn def(chapter: u32, failure: A380Failure, label: &'static str) -> FailureDefinition {
    FailureDefinition::new(chapter, failure.identifier(), label)
}

/// Selectable A380 failures in display order.
pub static A380_FAILURE_DEFINITIONS: &[FailureDefinition] = &[
    def(22, A380Failure::FmcA, "FMC-A"),
    def(22, A380Failure::FmcB, "FMC-B"),
    def(22, A380Failure::FmcC, "FMC-C"),

    def(23, A380Failure::AudioManagementUnit1, "AMU 1"),
    def(23, A380Failure::AudioManagementUnit2, "AMU 2"),
    def(23, A380Failure::RadioManagementPanel1, "RMP 1"),
    def(23, A380Failure::RadioManagementPanel2, "RMP 2"),
    def(23, A380Failure::RadioManagementPanel3, "RMP 3"),
    def(23, A380Failure::Vhf1, "VHF 1"),
    def(23, A380Failure::Vhf2, "VHF 2"),
    def(23, A380Failure::Vhf3, "VHF 3"),

    def(24, A380Failure::TransformerRectifier1, "TR 1"),
    def(24, A380Failure::TransformerRectifier2, "TR 2"),
    def(24, A380Failure::TransformerRectifierEssential, "ESS TR"),

    def(29, A380Failure::GreenReservoirLeak, "Green reservoir leak"),
    def(29, A380Failure::YellowReservoirLeak, "Yellow reservoir leak"),
    def(29, A380Failure::GreenReservoirAirLeak, "Green reservoir air leak"),
    def(29, A380Failure::YellowReservoirAirLeak, "Yellow reservoir air leak"),
    def(29, A380Failure::GreenReservoirReturnLeak, "Green reservoir return leak"),
    def(29, A380Failure::YellowReservoirReturnLeak, "Yellow reservoir return leak"),
    def(29, A380Failure::GreenElecPumpAOHeat, "Green A elec pump overheat"),
    def(29, A380Failure::GreenElecPumpBOHeat, "Green B elec pump overheat"),
    def(29, A380Failure::YellowElecPumpAOHeat, "Yellow A elec pump overheat"),
    def(29, A380Failure::YellowElecPumpBOHeat, "Yellow B elec pump overheat"),
    def(29, A380Failure::EnginePump1AOHeat, "Engine 1 pump A overheat"),
    def(29, A380Failure::EnginePump1BOHeat, "Engine 1 pump B overheat"),
    def(29, A380Failure::EnginePump2AOHeat, "Engine 2 pump A overheat"),
    def(29, A380Failure::EnginePump2BOHeat, "Engine 2 pump B overheat"),
    def(29, A380Failure::EnginePump3AOHeat, "Engine 3 pump A overheat"),
    def(29, A380Failure::EnginePump3BOHeat, "Engine 3 pump B overheat"),
    def(29, A380Failure::EnginePump4AOHeat, "Engine 4 pump A overheat"),
    def(29, A380Failure::EnginePump4BOHeat, "Engine 4 pump B overheat"),

    def(31, A380Failure::LeftPfdDisplay, "Captain PFD display"),
    def(31, A380Failure::RightPfdDisplay, "F/O PFD display"),

    def(32, A380Failure::LgciuPowerSupply1, "LGCIU 1 Power supply"),
    def(32, A380Failure::LgciuPowerSupply2, "LGCIU 2 Power supply"),
    def(32, A380Failure::LgciuInternalError1, "LGCIU 1 Internal error"),
    def(32, A380Failure::LgciuInternalError2, "LGCIU 2 Internal error"),

    // Only one of the four proximity sensor failures is exposed.
    def(
        32,
        A380Failure::GearProxSensorDamageGearUplockNose1,
        "Proximity sensor damage uplock nose gear #1",
    ),

    def(34, A380Failure::RadioAltimeter1, "RA 1"),
    def(34, A380Failure::RadioAltimeter2, "RA 2"),
    def(34, A380Failure::Transponder1, "XPDR 1"),
    def(34, A380Failure::Transponder2, "XPDR 2"),
];

static REGISTRY: LazyLock<Result<FailureRegistry>> =
    LazyLock::new(|| FailureRegistry::new(A380Failure::ENTRIES, A380_FAILURE_DEFINITIONS));

/// The process-wide A380 registry, built on first use.
///
/// # Errors
///
/// Returns the construction error if the A380 tables are inconsistent. The
/// same error is returned on every call.
pub fn try_registry() -> std::result::Result<&'static FailureRegistry, &'static Error> {
    REGISTRY.as_ref()
}

/// The process-wide A380 registry, built on first use.
///
/// # Panics
///
/// Panics if the A380 tables are inconsistent (duplicate identifiers or a
/// definition without a named entry).
#[must_use]
pub fn registry() -> &'static FailureRegistry {
    match try_registry() {
        Ok(registry) => registry,
        Err(err) => panic!("A380 failure tables are inconsistent: {err}"),
    }
}
