//! Real Nigerian LGA locations for realistic test fixtures.
//!
//! A connected subset of the national road network covering the Lagos to
//! Kano corridor. Coordinates, malaria prevalence and population figures
//! per LGA, with measured road distances in kilometers.

use medroute::graph::RoadNetwork;

/// A named LGA with routing attributes.
#[derive(Debug, Clone)]
pub struct Lga {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub prevalence: f64,
    pub population: u64,
}

impl Lga {
    pub const fn new(
        name: &'static str,
        lat: f64,
        lon: f64,
        prevalence: f64,
        population: u64,
    ) -> Self {
        Self {
            name,
            lat,
            lon,
            prevalence,
            population,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

// ============================================================================
// Lagos State
// ============================================================================

pub const LAGOS: &[Lga] = &[
    Lga::new("Lagos - Alimosho", 6.5244, 3.3792, 0.25, 14_000_000),
    Lga::new("Lagos - Ikeja", 6.5964, 3.3406, 0.18, 600_000),
    Lga::new("Lagos - Eti-Osa", 6.4698, 3.6012, 0.20, 287_785),
    Lga::new("Lagos - Agege", 6.6158, 3.3211, 0.23, 459_939),
    Lga::new("Lagos - Ajeromi-Ifelodun", 6.4588, 3.3299, 0.26, 684_105),
    Lga::new("Lagos - Amuwo-Odofin", 6.4417, 3.2902, 0.22, 318_166),
    Lga::new("Lagos - Apapa", 6.4489, 3.3594, 0.19, 217_362),
];

// ============================================================================
// Ogun State
// ============================================================================

pub const OGUN: &[Lga] = &[
    Lga::new("Ogun - Abeokuta South", 7.1475, 3.3619, 0.32, 593_100),
    Lga::new("Ogun - Ado-Odo/Ota", 6.6988, 3.2004, 0.22, 350_000),
    Lga::new("Ogun - Ifo", 6.8489, 3.6458, 0.28, 250_000),
    Lga::new("Ogun - Ewekoro", 6.9333, 3.2000, 0.29, 130_000),
];

// ============================================================================
// Oyo State
// ============================================================================

pub const OYO: &[Lga] = &[
    Lga::new("Oyo - Ibadan North", 7.3775, 3.9470, 0.38, 3_500_000),
    Lga::new("Oyo - Ibadan North-East", 7.4000, 3.9300, 0.40, 300_000),
    Lga::new("Oyo - Akinyele", 7.5333, 3.9833, 0.39, 220_000),
];

// ============================================================================
// Kwara State
// ============================================================================

pub const KWARA: &[Lga] = &[
    Lga::new("Kwara - Ilorin South", 8.4966, 4.5424, 0.44, 908_490),
    Lga::new("Kwara - Ilorin West", 8.4800, 4.5200, 0.43, 350_000),
    Lga::new("Kwara - Ilorin East", 8.5100, 4.5600, 0.45, 300_000),
];

// ============================================================================
// Niger State
// ============================================================================

pub const NIGER: &[Lga] = &[
    Lga::new("Niger - Chanchaga", 9.6139, 6.5569, 0.50, 304_113),
    Lga::new("Niger - Minna", 9.6167, 6.5500, 0.49, 250_000),
];

// ============================================================================
// Federal Capital Territory
// ============================================================================

pub const FCT: &[Lga] = &[
    Lga::new("FCT - AMAC", 9.0765, 7.3986, 0.45, 3_000_000),
    Lga::new("FCT - Abuja Municipal", 9.0579, 7.4951, 0.44, 1_500_000),
    Lga::new("FCT - Bwari", 9.2833, 7.3833, 0.46, 400_000),
];

// ============================================================================
// Kaduna State
// ============================================================================

pub const KADUNA: &[Lga] = &[
    Lga::new("Kaduna - Kaduna North", 10.5105, 7.4165, 0.48, 1_600_000),
    Lga::new("Kaduna - Kaduna South", 10.5000, 7.4000, 0.47, 800_000),
];

// ============================================================================
// Kano State
// ============================================================================

pub const KANO: &[Lga] = &[
    Lga::new("Kano - Dala", 12.0022, 8.5919, 0.52, 4_000_000),
    Lga::new("Kano - Kano Municipal", 12.0000, 8.5200, 0.51, 1_500_000),
    Lga::new("Kano - Nassarawa", 12.0500, 8.5500, 0.53, 800_000),
];

// ============================================================================
// Roads (measured distances in km)
// ============================================================================

pub const ROADS: &[(&str, &str, f64)] = &[
    // Lagos internal
    ("Lagos - Alimosho", "Lagos - Ikeja", 15.0),
    ("Lagos - Alimosho", "Lagos - Agege", 10.0),
    ("Lagos - Ikeja", "Lagos - Agege", 8.0),
    ("Lagos - Ikeja", "Lagos - Eti-Osa", 25.0),
    ("Lagos - Eti-Osa", "Lagos - Apapa", 12.0),
    ("Lagos - Apapa", "Lagos - Ajeromi-Ifelodun", 8.0),
    ("Lagos - Ajeromi-Ifelodun", "Lagos - Amuwo-Odofin", 10.0),
    // Ogun internal
    ("Ogun - Abeokuta South", "Ogun - Ewekoro", 20.0),
    ("Ogun - Ado-Odo/Ota", "Ogun - Ifo", 15.0),
    ("Ogun - Ifo", "Ogun - Ewekoro", 25.0),
    // Oyo internal
    ("Oyo - Ibadan North", "Oyo - Ibadan North-East", 8.0),
    ("Oyo - Ibadan North", "Oyo - Akinyele", 15.0),
    // Kwara internal
    ("Kwara - Ilorin South", "Kwara - Ilorin West", 8.0),
    ("Kwara - Ilorin West", "Kwara - Ilorin East", 10.0),
    // Niger internal
    ("Niger - Chanchaga", "Niger - Minna", 5.0),
    // FCT internal
    ("FCT - AMAC", "FCT - Abuja Municipal", 5.0),
    ("FCT - AMAC", "FCT - Bwari", 20.0),
    // Kaduna internal
    ("Kaduna - Kaduna North", "Kaduna - Kaduna South", 8.0),
    // Kano internal
    ("Kano - Dala", "Kano - Kano Municipal", 5.0),
    ("Kano - Kano Municipal", "Kano - Nassarawa", 8.0),
    // Inter-state highways
    ("Lagos - Alimosho", "Ogun - Abeokuta South", 100.0),
    ("Lagos - Ikeja", "Ogun - Ado-Odo/Ota", 20.0),
    ("Lagos - Alimosho", "Ogun - Ifo", 60.0),
    ("Lagos - Alimosho", "Oyo - Ibadan North", 120.0),
    ("Ogun - Abeokuta South", "Oyo - Ibadan North", 80.0),
    ("Ogun - Ado-Odo/Ota", "Oyo - Ibadan North", 75.0),
    ("Ogun - Ifo", "Oyo - Ibadan North", 50.0),
    ("Oyo - Ibadan North", "Kwara - Ilorin South", 155.0),
    ("Kwara - Ilorin South", "Niger - Chanchaga", 280.0),
    ("Kwara - Ilorin South", "FCT - AMAC", 430.0),
    ("FCT - AMAC", "Niger - Chanchaga", 120.0),
    ("FCT - AMAC", "Kaduna - Kaduna North", 170.0),
    ("FCT - AMAC", "Kano - Dala", 480.0),
    ("Niger - Chanchaga", "Kaduna - Kaduna North", 140.0),
    ("Kaduna - Kaduna North", "Kano - Dala", 210.0),
];

/// Every fixture LGA across all states.
pub fn all_lgas() -> Vec<&'static Lga> {
    [LAGOS, OGUN, OYO, KWARA, NIGER, FCT, KADUNA, KANO]
        .iter()
        .flat_map(|state| state.iter())
        .collect()
}

/// Build the full fixture network.
pub fn build_network() -> RoadNetwork {
    let mut builder = RoadNetwork::builder();
    for lga in all_lgas() {
        builder = builder.node(lga.name, lga.coords(), lga.prevalence, lga.population);
    }
    for &(from, to, distance_km) in ROADS {
        builder = builder.road(from, to, distance_km);
    }
    builder.build().expect("fixture network is valid")
}
