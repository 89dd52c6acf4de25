use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wayfare_core::{Direction, Expense, PartyType, Trip, TripStatus, settle};

mod importer;
mod state;

use state::{Store, TripRecord};

#[derive(Parser, Debug)]
#[command(name = "wayfare", version, about = "Local-first trip planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create and manage trips
    Trip {
        #[command(subcommand)]
        command: TripCommand,
    },

    /// Record and import shared expenses for the active trip
    Expense {
        #[command(subcommand)]
        command: ExpenseCommand,
    },

    /// Split the trip's expenses evenly and show who owes whom
    Settle {
        /// Trip id (defaults to the active trip)
        #[arg(long)]
        trip: Option<String>,
    },

    /// Estimate a budget range for a destination
    Budget {
        #[arg(long)]
        destination: String,

        /// solo | couple | group
        #[arg(long)]
        party: String,

        #[arg(long, default_value_t = 3)]
        days: u32,
    },

    /// Browse mock booking data for a destination
    Browse {
        #[command(subcommand)]
        command: BrowseCommand,
    },

    /// Show the generated day-by-day plan for a destination
    Plan {
        #[arg(long)]
        destination: String,

        /// Limit to the first N days
        #[arg(long)]
        days: Option<u32>,
    },

    /// Show or update the user profile (default party, currency)
    Profile {
        /// solo | couple | group
        #[arg(long)]
        party: Option<String>,

        #[arg(long)]
        currency: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum TripCommand {
    /// Create a trip and generate its itinerary; it becomes the active trip
    New {
        #[arg(long)]
        destination: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// solo | couple | group (defaults from profile, then solo)
        #[arg(long)]
        party: Option<String>,

        /// Override the participant count derived from the party type
        #[arg(long)]
        travelers: Option<u32>,
    },

    /// List all trips
    List,

    /// Show one trip in full
    Show {
        /// Trip id (defaults to the active trip)
        #[arg(long)]
        id: Option<String>,
    },

    /// Delete a trip
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Mark a trip as the active one
    Activate {
        #[arg(long)]
        id: String,
    },

    /// Set a trip's status: planned | ongoing | completed | confirmed
    Status {
        /// Trip id (defaults to the active trip)
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        status: String,
    },

    /// Edit the active trip's packing list
    Pack {
        /// Add an item
        #[arg(long)]
        add: Option<String>,

        /// Remove an item by exact text
        #[arg(long)]
        remove: Option<String>,
    },

    /// Set or show the active trip's story note
    Story {
        /// New story text; omit to print the current one
        text: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ExpenseCommand {
    /// Record a shared expense against the active trip
    Add {
        #[arg(long)]
        desc: String,

        #[arg(long)]
        amount: f64,

        /// Participant index, 1..=travelers
        #[arg(long)]
        paid_by: u32,

        #[arg(long, default_value = "misc")]
        category: String,
    },

    /// List the active trip's expenses
    List,

    /// Delete one expense by id
    Remove {
        #[arg(long)]
        id: String,
    },

    /// Import expenses from a CSV (description,amount,paid_by,category[,date])
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum BrowseCommand {
    Hotels { destination: String },
    Flights { destination: String },
    Trains { destination: String },
    Buses { destination: String },
    Restaurants { destination: String },
    /// Airbnb-style stays
    Stays { destination: String },
    Resorts { destination: String },
    Packages { destination: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Trip { command } => trip_command(command),
        Command::Expense { command } => expense_command(command),
        Command::Settle { trip } => settle_command(trip.as_deref()),
        Command::Budget {
            destination,
            party,
            days,
        } => budget_command(&destination, &party, days),
        Command::Browse { command } => browse_command(command),
        Command::Plan { destination, days } => plan_command(&destination, days),
        Command::Profile { party, currency } => profile_command(party.as_deref(), currency),
    }
}

fn profile_command(party: Option<&str>, currency: Option<String>) -> Result<()> {
    let mut profile = state::read_profile()?;
    let mut changed = false;

    if let Some(p) = party {
        profile.default_party = Some(parse_party(p)?);
        changed = true;
    }
    if let Some(c) = currency {
        profile.currency = c;
        changed = true;
    }

    if changed {
        if profile.created_at_utc.is_none() {
            profile.created_at_utc = Some(Utc::now().to_rfc3339());
        }
        state::write_profile(&profile)?;
        println!("Profile updated: {}", state::profile_path()?.display());
    } else {
        println!("Default party: {:?}", profile.default_party);
        println!("Currency: {}", profile.currency);
    }

    Ok(())
}

fn parse_party(s: &str) -> Result<PartyType> {
    match s {
        "solo" => Ok(PartyType::Solo),
        "couple" => Ok(PartyType::Couple),
        "group" => Ok(PartyType::Group),
        other => bail!("unknown party type: {} (expected solo|couple|group)", other),
    }
}

fn parse_status(s: &str) -> Result<TripStatus> {
    match s {
        "planned" => Ok(TripStatus::Planned),
        "ongoing" => Ok(TripStatus::Ongoing),
        "completed" => Ok(TripStatus::Completed),
        "confirmed" => Ok(TripStatus::Confirmed),
        other => bail!(
            "unknown status: {} (expected planned|ongoing|completed|confirmed)",
            other
        ),
    }
}

fn status_name(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Planned => "planned",
        TripStatus::Ongoing => "ongoing",
        TripStatus::Completed => "completed",
        TripStatus::Confirmed => "confirmed",
    }
}

fn target_or_bail<'a>(store: &'a Store, id: Option<&str>) -> Result<&'a TripRecord> {
    match store.target(id) {
        Some(rec) => Ok(rec),
        None => bail!("no matching trip; create one with: wayfare trip new"),
    }
}

fn trip_command(command: TripCommand) -> Result<()> {
    let mut store = Store::load()?;

    match command {
        TripCommand::New {
            destination,
            start,
            end,
            party,
            travelers,
        } => {
            let profile = state::read_profile()?;
            let party = match party {
                Some(p) => parse_party(&p)?,
                None => profile.default_party.unwrap_or(PartyType::Solo),
            };

            let id = format!("trip-{}", Utc::now().format("%Y%m%d%H%M%S"));
            let plans = wayfare_catalog::day_plans_for(&destination).to_vec();
            let mut trip = Trip::new(&id, &destination, start, end, party).with_day_plans(plans);
            if let Some(n) = travelers {
                trip = trip.with_travelers(n);
            }

            let days = trip.duration_days();
            let key = wayfare_catalog::resolve(&destination);
            let hotels = wayfare_catalog::hotels_for(&destination);
            let estimate = wayfare_catalog::estimate(&destination, party, days);

            println!("Created {} — {} ({} days, {} travelers)\n", id, destination, days, trip.travelers);
            println!("Itinerary source: {}", key);
            println!("Day plans: {}", trip.day_plans.len());
            println!("Hotels to consider: {} (from {})", hotels.len(), hotels[0].name);

            match estimate {
                Some(est) => println!(
                    "Estimated budget: {} {}-{} ({}-{} per day)",
                    profile.currency, est.min, est.max, est.per_day_min, est.per_day_max
                ),
                None => println!("Estimated budget: no data for this destination/party"),
            }

            store.add_trip(trip);
            store.save()?;
            println!("\nActive trip is now {}", id);
        }

        TripCommand::List => {
            if store.trips.is_empty() {
                println!("No trips yet. Create one with: wayfare trip new");
                return Ok(());
            }
            for rec in &store.trips {
                let t = &rec.trip;
                let active = if store.active_trip_id.as_deref() == Some(&t.id) {
                    " (active)"
                } else {
                    ""
                };
                println!(
                    "{} | {} | {} -> {} | {} travelers | {}{}",
                    t.id,
                    t.destination,
                    t.start_date,
                    t.end_date,
                    t.travelers,
                    status_name(t.status),
                    active
                );
            }
        }

        TripCommand::Show { id } => {
            let rec = target_or_bail(&store, id.as_deref())?;
            let t = &rec.trip;
            println!("{} — {}", t.id, t.destination);
            println!("Dates: {} -> {} ({} days)", t.start_date, t.end_date, t.duration_days());
            println!("Travelers: {} | Status: {}", t.travelers, status_name(t.status));
            if !t.packing_list.is_empty() {
                println!("\nPacking list:");
                for item in &t.packing_list {
                    println!("- {}", item);
                }
            }
            if let Some(story) = &t.story {
                println!("\nStory: {}", story);
            }
            if !t.day_plans.is_empty() {
                println!("\nItinerary:");
                for plan in &t.day_plans {
                    println!("Day {}: {}", plan.day, plan.title);
                }
            }
            println!("\nExpenses: {}", rec.expenses.len());
        }

        TripCommand::Delete { id } => {
            if !store.remove_trip(&id) {
                bail!("no trip with id {}", id);
            }
            store.save()?;
            println!("Deleted {}", id);
        }

        TripCommand::Activate { id } => {
            if store.find(&id).is_none() {
                bail!("no trip with id {}", id);
            }
            store.active_trip_id = Some(id.clone());
            store.save()?;
            println!("Active trip is now {}", id);
        }

        TripCommand::Status { id, status } => {
            let status = parse_status(&status)?;
            let rec = match store.target_mut(id.as_deref()) {
                Some(rec) => rec,
                None => bail!("no matching trip"),
            };
            rec.trip.status = status;
            let trip_id = rec.trip.id.clone();
            store.save()?;
            println!("{} is now {}", trip_id, status_name(status));
        }

        TripCommand::Pack { add, remove } => {
            let rec = match store.target_mut(None) {
                Some(rec) => rec,
                None => bail!("no active trip"),
            };
            if let Some(item) = add {
                rec.trip.packing_list.push(item);
            }
            if let Some(item) = remove {
                rec.trip.packing_list.retain(|i| i != &item);
            }
            let list = rec.trip.packing_list.clone();
            store.save()?;
            if list.is_empty() {
                println!("Packing list is empty");
            }
            for item in &list {
                println!("- {}", item);
            }
        }

        TripCommand::Story { text } => {
            let rec = match store.target_mut(None) {
                Some(rec) => rec,
                None => bail!("no active trip"),
            };
            match text {
                Some(text) => {
                    rec.trip.story = Some(text);
                    store.save()?;
                    println!("Story saved");
                }
                None => match &rec.trip.story {
                    Some(story) => println!("{}", story),
                    None => println!("(no story yet)"),
                },
            }
        }
    }

    Ok(())
}

/// Next free "exp-NNNN" id, surviving deletions.
fn next_expense_id(expenses: &[Expense]) -> String {
    let max = expenses
        .iter()
        .filter_map(|e| e.id.strip_prefix("exp-")?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("exp-{:04}", max + 1)
}

fn expense_command(command: ExpenseCommand) -> Result<()> {
    let mut store = Store::load()?;

    match command {
        ExpenseCommand::Add {
            desc,
            amount,
            paid_by,
            category,
        } => {
            let rec = match store.target_mut(None) {
                Some(rec) => rec,
                None => bail!("no active trip; create one with: wayfare trip new"),
            };
            if paid_by < 1 || paid_by > rec.trip.travelers {
                bail!(
                    "paid-by must be 1..={} for this trip",
                    rec.trip.travelers
                );
            }
            if amount < 0.0 {
                bail!("amount must be non-negative");
            }

            let id = next_expense_id(&rec.expenses);
            let payer = wayfare_core::participant_label(paid_by);
            rec.expenses
                .push(Expense::new(&id, desc, amount, &payer, category));
            store.save()?;
            println!("Recorded {} paid by {}", id, payer);
        }

        ExpenseCommand::List => {
            let rec = target_or_bail(&store, None)?;
            if rec.expenses.is_empty() {
                println!("No expenses recorded for {}", rec.trip.id);
                return Ok(());
            }
            let mut total = 0.0;
            for e in &rec.expenses {
                total += e.amount;
                println!(
                    "{} | {:.2} | {} | {} | {}",
                    e.id, e.amount, e.paid_by, e.category, e.description
                );
            }
            println!("\nTotal: {:.2} across {} expenses", total, rec.expenses.len());
        }

        ExpenseCommand::Remove { id } => {
            let rec = match store.target_mut(None) {
                Some(rec) => rec,
                None => bail!("no active trip"),
            };
            let before = rec.expenses.len();
            rec.expenses.retain(|e| e.id != id);
            if rec.expenses.len() == before {
                bail!("no expense with id {}", id);
            }
            store.save()?;
            println!("Removed {}", id);
        }

        ExpenseCommand::Import { csv } => {
            if !csv.exists() {
                bail!("CSV not found: {} (pass --csv <path>)", csv.display());
            }
            let rows = importer::parse_expense_csv(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;

            let rec = match store.target_mut(None) {
                Some(rec) => rec,
                None => bail!("no active trip; create one with: wayfare trip new"),
            };

            let count = rows.len();
            for row in rows {
                let id = next_expense_id(&rec.expenses);
                let mut expense = Expense::new(
                    &id,
                    row.description,
                    row.amount,
                    row.paid_by,
                    row.category,
                );
                if let Some(date) = row.recorded_on {
                    expense = expense.with_recorded_on(date);
                }
                rec.expenses.push(expense);
            }
            let trip_id = rec.trip.id.clone();
            store.save()?;
            println!("Imported {} expenses into {} from {}", count, trip_id, csv.display());
        }
    }

    Ok(())
}

fn settle_command(trip_id: Option<&str>) -> Result<()> {
    let store = Store::load()?;
    let rec = target_or_bail(&store, trip_id)?;
    let result = settle(&rec.expenses, rec.trip.travelers);

    let total: f64 = rec.expenses.iter().map(|e| e.amount).sum();
    println!(
        "Settlement for {} ({}) — {} participants, total {:.2}\n",
        rec.trip.id,
        rec.trip.destination,
        rec.trip.travelers,
        total
    );

    for s in &result {
        println!("{}: paid {:.2} | balance {:+.2}", s.participant, s.paid, s.balance);
    }

    println!("\nWho owes whom:");
    let mut any = false;
    for s in &result {
        match s.direction {
            Direction::Owes => {
                println!("- {} owes {:.2}", s.participant, s.balance.abs());
                any = true;
            }
            Direction::Receives => {
                println!("- {} receives {:.2}", s.participant, s.balance);
                any = true;
            }
            Direction::Settled => {}
        }
    }
    if !any {
        println!("- all settled up");
    }

    Ok(())
}

fn budget_command(destination: &str, party: &str, days: u32) -> Result<()> {
    let party = parse_party(party)?;
    let profile = state::read_profile()?;

    match wayfare_catalog::estimate(destination, party, days) {
        Some(est) => {
            println!(
                "{} for {} days ({:?}):",
                destination, days, party
            );
            println!(
                "  {} {} - {} total ({} - {} per day)",
                profile.currency, est.min, est.max, est.per_day_min, est.per_day_max
            );
        }
        None => println!(
            "No budget data for {} ({:?}); try another destination",
            destination, party
        ),
    }

    Ok(())
}

fn browse_command(command: BrowseCommand) -> Result<()> {
    match command {
        BrowseCommand::Hotels { destination } => {
            for h in wayfare_catalog::hotels_for(&destination) {
                println!("{} | {} | {}/night | {:.1}", h.name, h.area, h.price_per_night, h.rating);
            }
        }
        BrowseCommand::Flights { destination } => {
            for f in wayfare_catalog::flights_for(&destination) {
                println!("{} from {} | {} -> {} | {}", f.airline, f.from, f.depart, f.arrive, f.price);
            }
        }
        BrowseCommand::Trains { destination } => {
            for t in wayfare_catalog::trains_for(&destination) {
                println!("{} from {} | {} -> {} | {} | {}", t.name, t.from, t.depart, t.arrive, t.class, t.price);
            }
        }
        BrowseCommand::Buses { destination } => {
            for b in wayfare_catalog::buses_for(&destination) {
                println!("{} from {} | {} | {} | {} | {}", b.operator, b.from, b.depart, b.duration, b.kind, b.price);
            }
        }
        BrowseCommand::Restaurants { destination } => {
            for r in wayfare_catalog::restaurants_for(&destination) {
                println!("{} | {} | {} for two | try: {}", r.name, r.cuisine, r.price_for_two, r.must_try);
            }
        }
        BrowseCommand::Stays { destination } => {
            for s in wayfare_catalog::stays_for(&destination) {
                println!("{} | {} | {}/night | {:.1}", s.name, s.area, s.price_per_night, s.rating);
            }
        }
        BrowseCommand::Resorts { destination } => {
            for s in wayfare_catalog::resorts_for(&destination) {
                println!("{} | {} | {}/night | {:.1}", s.name, s.area, s.price_per_night, s.rating);
            }
        }
        BrowseCommand::Packages { destination } => {
            for p in wayfare_catalog::packages_for(&destination) {
                println!("{} | {} days | {}/person | {}", p.name, p.days, p.price_per_person, p.highlights);
            }
        }
    }

    Ok(())
}

fn plan_command(destination: &str, days: Option<u32>) -> Result<()> {
    let plans = wayfare_catalog::day_plans_for(destination);
    let shown = match days {
        Some(n) => &plans[..plans.len().min(n as usize)],
        None => plans,
    };

    println!("Plan for {} (source: {})\n", destination, wayfare_catalog::resolve(destination));
    for plan in shown {
        println!("Day {}: {}", plan.day, plan.title);
        for act in &plan.activities {
            if act.notes.is_empty() {
                println!("  {} — {}", act.time, act.title);
            } else {
                println!("  {} — {} ({})", act.time, act.title, act.notes);
            }
        }
        println!();
    }

    Ok(())
}
