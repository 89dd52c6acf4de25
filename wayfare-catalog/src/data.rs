//! Catalog contents: hard-coded mock booking and itinerary data.
//!
//! Prices are indicative INR figures. The "default" entry populates every
//! field so lookups against unknown destinations always have data to show.

use std::collections::HashMap;

use wayfare_core::{DayPlan, PlannedActivity};

use crate::catalog::{
    BudgetBand, BusRoute, CatalogEntry, EstimatedBudget, Flight, Restaurant, Stay, TourPackage,
    TrainRoute,
};
use crate::resolver::DEFAULT_KEY;

fn stay(name: &str, area: &str, price_per_night: u32, rating: f32) -> Stay {
    Stay {
        name: name.to_string(),
        area: area.to_string(),
        price_per_night,
        rating,
    }
}

fn flight(airline: &str, from: &str, depart: &str, arrive: &str, price: u32) -> Flight {
    Flight {
        airline: airline.to_string(),
        from: from.to_string(),
        depart: depart.to_string(),
        arrive: arrive.to_string(),
        price,
    }
}

fn train(name: &str, from: &str, depart: &str, arrive: &str, class: &str, price: u32) -> TrainRoute {
    TrainRoute {
        name: name.to_string(),
        from: from.to_string(),
        depart: depart.to_string(),
        arrive: arrive.to_string(),
        class: class.to_string(),
        price,
    }
}

fn bus(operator: &str, from: &str, depart: &str, duration: &str, kind: &str, price: u32) -> BusRoute {
    BusRoute {
        operator: operator.to_string(),
        from: from.to_string(),
        depart: depart.to_string(),
        duration: duration.to_string(),
        kind: kind.to_string(),
        price,
    }
}

fn restaurant(name: &str, cuisine: &str, price_for_two: u32, must_try: &str) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        price_for_two,
        must_try: must_try.to_string(),
    }
}

fn package(name: &str, days: u32, price_per_person: u32, highlights: &str) -> TourPackage {
    TourPackage {
        name: name.to_string(),
        days,
        price_per_person,
        highlights: highlights.to_string(),
    }
}

fn act(time: &str, title: &str, notes: &str) -> PlannedActivity {
    PlannedActivity {
        time: time.to_string(),
        title: title.to_string(),
        notes: notes.to_string(),
    }
}

fn day(n: u32, title: &str, activities: Vec<PlannedActivity>) -> DayPlan {
    DayPlan {
        day: n,
        title: title.to_string(),
        activities,
    }
}

fn bands(solo: (u32, u32), couple: (u32, u32), group: (u32, u32)) -> EstimatedBudget {
    EstimatedBudget {
        solo: Some(BudgetBand {
            min: solo.0,
            max: solo.1,
        }),
        couple: Some(BudgetBand {
            min: couple.0,
            max: couple.1,
        }),
        group: Some(BudgetBand {
            min: group.0,
            max: group.1,
        }),
    }
}

fn goa() -> CatalogEntry {
    CatalogEntry {
        hotels: vec![
            stay("Taj Holiday Village", "Candolim", 9500, 4.6),
            stay("Casa Anjuna", "Anjuna", 4200, 4.2),
            stay("Backpacker Panda", "Calangute", 900, 3.9),
        ],
        flights: vec![
            flight("IndiGo 6E-204", "Delhi", "06:10", "08:45", 5400),
            flight("Vistara UK-853", "Mumbai", "09:30", "10:45", 3600),
        ],
        trains: vec![
            train("Goa Express", "Delhi", "15:00", "05:40 +2d", "3A", 2100),
            train("Jan Shatabdi", "Mumbai", "05:25", "14:10", "CC", 850),
        ],
        buses: vec![
            bus("Paulo Travels", "Mumbai", "18:30", "12h", "AC Sleeper", 1400),
            bus("VRL Travels", "Bengaluru", "19:00", "13h", "AC Sleeper", 1600),
        ],
        restaurants: vec![
            restaurant("Fisherman's Wharf", "Goan seafood", 1800, "Crab xec xec"),
            restaurant("Vinayak Family Restaurant", "Goan thali", 700, "Fish thali"),
            restaurant("Artjuna Cafe", "Mediterranean", 1100, "Shakshuka"),
        ],
        airbnb: vec![
            stay("Portuguese Villa Assagao", "Assagao", 6500, 4.8),
            stay("Riverside Cottage", "Siolim", 3200, 4.4),
        ],
        resorts: vec![
            stay("W Goa", "Vagator", 18000, 4.7),
            stay("Alila Diwa", "Majorda", 12500, 4.6),
        ],
        tour_packages: vec![
            package(
                "North Goa Explorer",
                3,
                8500,
                "Fort Aguada, Anjuna flea market, Baga nightlife",
            ),
            package("Island Hopper", 2, 5200, "Grand Island snorkelling, dolphin trip"),
        ],
        day_plans: vec![
            day(
                1,
                "North Goa beaches",
                vec![
                    act("09:00", "Breakfast at Calangute", "Try poi bread"),
                    act("11:00", "Fort Aguada", "Lighthouse views"),
                    act("17:30", "Sunset at Baga beach", "Shacks stay open late"),
                ],
            ),
            day(
                2,
                "Old Goa and Panjim",
                vec![
                    act("09:30", "Basilica of Bom Jesus", ""),
                    act("13:00", "Lunch in Fontainhas", "Latin quarter walk"),
                    act("19:00", "Mandovi river cruise", ""),
                ],
            ),
            day(
                3,
                "South Goa day",
                vec![
                    act("10:00", "Palolem beach", "Quieter than the north"),
                    act("14:00", "Cabo de Rama fort", ""),
                    act("18:00", "Seafood dinner", "Book ahead in season"),
                ],
            ),
        ],
        estimated_budget: bands((9000, 15000), (15000, 25500), (30000, 48000)),
    }
}

fn mumbai() -> CatalogEntry {
    CatalogEntry {
        hotels: vec![
            stay("The Taj Mahal Palace", "Colaba", 22000, 4.8),
            stay("Residency Hotel Fort", "Fort", 4800, 4.1),
            stay("Hotel Suba Palace", "Apollo Bunder", 5600, 4.0),
        ],
        flights: vec![
            flight("Air India AI-864", "Delhi", "07:00", "09:10", 4900),
            flight("IndiGo 6E-5301", "Bengaluru", "08:20", "10:05", 4100),
        ],
        trains: vec![
            train("Rajdhani Express", "Delhi", "16:25", "08:15 +1d", "2A", 3300),
            train("Deccan Queen", "Pune", "07:15", "10:25", "CC", 420),
        ],
        buses: vec![
            bus("Neeta Travels", "Pune", "Hourly", "3.5h", "AC Seater", 450),
            bus("Gujarat Travels", "Ahmedabad", "20:00", "9h", "AC Sleeper", 900),
        ],
        restaurants: vec![
            restaurant("Trishna", "Coastal", 2600, "Butter garlic crab"),
            restaurant("Cafe Madras", "South Indian", 400, "Rava idli"),
            restaurant("Bademiya", "Street kebabs", 800, "Seekh kebab rolls"),
        ],
        airbnb: vec![stay("Bandra Art Loft", "Bandra West", 5500, 4.6)],
        resorts: vec![],
        tour_packages: vec![package(
            "Heritage Mumbai Walk",
            1,
            1500,
            "Gateway of India, CST, Crawford market",
        )],
        day_plans: vec![
            day(
                1,
                "South Mumbai heritage",
                vec![
                    act("09:00", "Gateway of India", "Go early to beat crowds"),
                    act("11:00", "Chhatrapati Shivaji museum", ""),
                    act("18:30", "Marine Drive at dusk", "Queen's necklace lights"),
                ],
            ),
            day(
                2,
                "Markets and street food",
                vec![
                    act("10:00", "Crawford Market", ""),
                    act("13:00", "Lunch at Cafe Madras", ""),
                    act("17:00", "Juhu beach chaat", "Pani puri stalls"),
                ],
            ),
            day(
                3,
                "Elephanta and Bandra",
                vec![
                    act("08:30", "Ferry to Elephanta caves", "First ferry from Gateway"),
                    act("15:00", "Bandra fort and sea link view", ""),
                    act("20:00", "Dinner in Bandra West", ""),
                ],
            ),
        ],
        estimated_budget: bands((12000, 21000), (19500, 33000), (36000, 60000)),
    }
}

fn manali() -> CatalogEntry {
    CatalogEntry {
        hotels: vec![
            stay("Span Resort & Spa", "Kullu-Manali highway", 11000, 4.5),
            stay("Johnson Lodge", "Old Manali road", 5200, 4.3),
            stay("Zostel Manali", "Old Manali", 700, 4.2),
        ],
        flights: vec![flight("Alliance Air 9I-803", "Delhi", "06:40", "08:00", 6800)],
        trains: vec![train(
            "Kalka Shatabdi + road",
            "Delhi",
            "07:40",
            "Chandigarh 11:05, then 8h road",
            "CC",
            1300,
        )],
        buses: vec![
            bus("HRTC Volvo", "Delhi ISBT", "18:45", "13h", "AC Seater", 1450),
            bus("Laxmi Holidays", "Chandigarh", "21:00", "8h", "AC Sleeper", 1100),
        ],
        restaurants: vec![
            restaurant("Johnson's Cafe", "Continental", 1400, "Trout with herbs"),
            restaurant("Cafe 1947", "Italian", 1000, "Wood-fired pizza"),
            restaurant("Chopsticks", "Tibetan", 800, "Thukpa and momos"),
        ],
        airbnb: vec![stay("Orchard Hut", "Naggar", 3800, 4.7)],
        resorts: vec![stay("ManuAllaya Resort", "Log Huts area", 9800, 4.4)],
        tour_packages: vec![package(
            "Solang & Atal Tunnel",
            1,
            2200,
            "Solang valley, Atal tunnel, Sissu",
        )],
        day_plans: vec![
            day(
                1,
                "Old Manali",
                vec![
                    act("10:00", "Hadimba temple", "Cedar forest walk"),
                    act("13:00", "Lunch in Old Manali", ""),
                    act("16:00", "Manu temple and riverside", ""),
                ],
            ),
            day(
                2,
                "Solang valley",
                vec![
                    act("08:00", "Drive to Solang", "Paragliding slots fill early"),
                    act("12:00", "Atal tunnel to Sissu", ""),
                    act("19:00", "Mall road evening", ""),
                ],
            ),
            day(
                3,
                "Naggar and Jogini falls",
                vec![
                    act("09:30", "Naggar castle", ""),
                    act("14:00", "Jogini waterfall hike", "Easy 3km round trip"),
                ],
            ),
        ],
        // couple band intentionally not divisible by 3
        estimated_budget: bands((8400, 13500), (20000, 35000), (33000, 54000)),
    }
}

fn jaipur() -> CatalogEntry {
    CatalogEntry {
        hotels: vec![
            stay("Samode Haveli", "Gangapole", 14500, 4.7),
            stay("Umaid Bhawan Heritage", "Bani Park", 3900, 4.3),
        ],
        flights: vec![flight("IndiGo 6E-768", "Mumbai", "10:15", "12:00", 4300)],
        trains: vec![train(
            "Ajmer Shatabdi",
            "Delhi",
            "06:05",
            "10:30",
            "CC",
            900,
        )],
        buses: vec![bus("RSRTC Volvo", "Delhi", "Every 2h", "5.5h", "AC Seater", 800)],
        restaurants: vec![
            restaurant("Laxmi Misthan Bhandar", "Rajasthani", 600, "Pyaaz kachori"),
            restaurant("Suvarna Mahal", "Royal thali", 4000, "Dal baati churma"),
        ],
        airbnb: vec![],
        resorts: vec![],
        tour_packages: vec![package(
            "Pink City Heritage",
            2,
            4800,
            "Amber fort, City Palace, Hawa Mahal",
        )],
        day_plans: vec![
            day(
                1,
                "Forts",
                vec![
                    act("08:30", "Amber fort", "Elephant-free jeep route"),
                    act("13:00", "Lunch near Jal Mahal", ""),
                    act("16:00", "Nahargarh sunset point", ""),
                ],
            ),
            day(
                2,
                "Pink city",
                vec![
                    act("09:00", "Hawa Mahal facade", "Best light before 10"),
                    act("11:00", "City Palace", ""),
                    act("17:00", "Bapu bazaar shopping", ""),
                ],
            ),
        ],
        estimated_budget: bands((7500, 12000), (12900, 21000), (24000, 42000)),
    }
}

fn udaipur() -> CatalogEntry {
    CatalogEntry {
        hotels: vec![
            stay("Jagat Niwas Palace", "Lal Ghat", 7800, 4.6),
            stay("Zostel Udaipur", "Chandpole", 650, 4.1),
        ],
        flights: vec![flight("IndiGo 6E-469", "Delhi", "11:35", "13:00", 5100)],
        trains: vec![train(
            "Mewar Express",
            "Delhi",
            "19:05",
            "07:20 +1d",
            "3A",
            1500,
        )],
        buses: vec![bus("RSRTC", "Jaipur", "07:00", "7h", "AC Seater", 650)],
        restaurants: vec![
            restaurant("Ambrai", "North Indian", 2400, "Lakeside laal maas"),
            restaurant("Millets of Mewar", "Organic local", 700, "Millet pancakes"),
        ],
        airbnb: vec![stay("Heritage Haveli Room", "Old city", 2600, 4.5)],
        resorts: vec![],
        tour_packages: vec![],
        day_plans: vec![
            day(
                1,
                "Lake Pichola",
                vec![
                    act("09:30", "City Palace", ""),
                    act("16:30", "Boat ride to Jag Mandir", "Sunset slot"),
                ],
            ),
            day(
                2,
                "Old city walk",
                vec![
                    act("08:00", "Jagdish temple", ""),
                    act("10:30", "Bagore ki Haveli", ""),
                    act("19:00", "Dharohar folk dance show", "Tickets at the door"),
                ],
            ),
        ],
        // no budget bands: the estimator reports this city as unpriced
        estimated_budget: EstimatedBudget::default(),
    }
}

fn default_entry() -> CatalogEntry {
    CatalogEntry {
        hotels: vec![
            stay("Central Comfort Inn", "City centre", 3500, 4.0),
            stay("Budget Stay Lodge", "Near station", 1200, 3.6),
        ],
        flights: vec![
            flight("IndiGo", "Delhi", "08:00", "10:00", 4500),
            flight("Air India", "Mumbai", "12:30", "14:30", 4800),
        ],
        trains: vec![train("Express service", "Delhi", "17:00", "morning +1d", "3A", 1400)],
        buses: vec![bus("State transport", "Nearest metro", "Hourly", "varies", "AC Seater", 700)],
        restaurants: vec![
            restaurant("Local Flavours", "Regional", 800, "Chef's thali"),
            restaurant("Highway Dhaba", "North Indian", 500, "Dal makhani"),
        ],
        airbnb: vec![stay("Homestay Room", "Residential area", 1800, 4.2)],
        resorts: vec![stay("Lakeside Retreat", "Outskirts", 6500, 4.3)],
        tour_packages: vec![package(
            "City Highlights",
            2,
            3500,
            "Main sights with a local guide",
        )],
        day_plans: vec![
            day(
                1,
                "Arrival and city centre",
                vec![
                    act("10:00", "Check in and local market walk", ""),
                    act("14:00", "Main city landmark", ""),
                    act("19:00", "Dinner at a local favourite", ""),
                ],
            ),
            day(
                2,
                "Sights",
                vec![
                    act("09:00", "Museum or fort visit", ""),
                    act("13:00", "Regional lunch", ""),
                    act("17:00", "Sunset viewpoint", ""),
                ],
            ),
            day(
                3,
                "Easy last day",
                vec![
                    act("10:00", "Souvenir shopping", ""),
                    act("13:00", "Cafe lunch", ""),
                ],
            ),
        ],
        estimated_budget: bands((9000, 15000), (15000, 24000), (27000, 45000)),
    }
}

/// Build the full catalog map. Called once via `catalog()`.
pub(crate) fn build() -> HashMap<&'static str, CatalogEntry> {
    HashMap::from([
        ("Goa", goa()),
        ("Mumbai", mumbai()),
        ("Manali", manali()),
        ("Jaipur", jaipur()),
        ("Udaipur", udaipur()),
        (DEFAULT_KEY, default_entry()),
    ])
}
