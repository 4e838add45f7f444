#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeteorShower {
    pub name: &'static str,
    pub peak: &'static str,
    pub rate: u32,
    pub active: &'static str,
    pub month: u32,
}

pub static METEOR_SHOWERS: [MeteorShower; 7] = [
    MeteorShower {
        name: "Quadrantids",
        peak: "1/3-1/4",
        rate: 120,
        active: "12/28-1/12",
        month: 1,
    },
    MeteorShower {
        name: "Lyrids",
        peak: "4/22-4/23",
        rate: 18,
        active: "4/16-4/25",
        month: 4,
    },
    MeteorShower {
        name: "Eta Aquarids",
        peak: "5/6-5/7",
        rate: 50,
        active: "4/19-5/28",
        month: 5,
    },
    MeteorShower {
        name: "Perseids",
        peak: "8/12-8/13",
        rate: 100,
        active: "7/17-8/24",
        month: 8,
    },
    MeteorShower {
        name: "Orionids",
        peak: "10/21-10/22",
        rate: 25,
        active: "10/2-11/7",
        month: 10,
    },
    MeteorShower {
        name: "Leonids",
        peak: "11/17-11/18",
        rate: 15,
        active: "11/6-11/30",
        month: 11,
    },
    MeteorShower {
        name: "Geminids",
        peak: "12/13-12/14",
        rate: 120,
        active: "12/4-12/17",
        month: 12,
    },
];

/// First shower peaking in a later month than `month`, wrapping to January.
pub fn next_shower(month: u32) -> &'static MeteorShower {
    METEOR_SHOWERS
        .iter()
        .find(|s| s.month > month)
        .unwrap_or(&METEOR_SHOWERS[0])
}
