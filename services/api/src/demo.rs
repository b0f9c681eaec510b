use crate::infra::{
    load_directory, parse_location, parse_service_type, parse_topic, parse_urgency,
    InMemoryDirectory,
};
use clap::{Args, Subcommand};
use legal_help::config::{AppConfig, DirectoryConfig};
use legal_help::directory::{
    DirectoryService, Lawyer, LawyerFilter, LegalAidService, LegalResource, ServiceFilter,
    ServiceType,
};
use legal_help::error::AppError;
use legal_help::triage::{
    compute_recommendation, AnswerSet, Destination, LocationPreference, QuestionId, QuizSession,
    Recommendation, RetreatStep, Topic, Urgency,
};
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct TriageArgs {
    /// What the person is facing (landlord, family, job, consumer, other)
    #[arg(long, value_parser = parse_topic)]
    pub(crate) topic: Option<Topic>,
    /// How urgent it is (urgent, soon, explore)
    #[arg(long, value_parser = parse_urgency)]
    pub(crate) urgency: Option<Urgency>,
    /// Whether to prioritise nearby help (nearby, province)
    #[arg(long, value_parser = parse_location)]
    pub(crate) location: Option<LocationPreference>,
    /// Print the recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum DirectoryArgs {
    /// List lawyers, optionally filtered by search term and specialty
    Lawyers {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        specialty: Option<String>,
    },
    /// List legal-aid services, optionally by service type
    LegalAid {
        #[arg(long, value_parser = parse_service_type)]
        service_type: Option<ServiceType>,
    },
    /// List emergency contacts
    Emergency,
}

impl TriageArgs {
    fn answers(&self) -> AnswerSet {
        let mut answers = AnswerSet::new();
        if let Some(topic) = self.topic {
            answers.record(QuestionId::Topic, topic.token());
        }
        if let Some(urgency) = self.urgency {
            answers.record(QuestionId::Urgency, urgency.token());
        }
        if let Some(location) = self.location {
            answers.record(QuestionId::Location, location.token());
        }
        answers
    }
}

pub(crate) fn run_triage(args: TriageArgs) -> Result<(), AppError> {
    let recommendation = compute_recommendation(&args.answers());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &recommendation).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_recommendation(&mut out, &recommendation)?;
    }
    Ok(())
}

pub(crate) fn run_quiz() -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    drive_quiz(stdin.lock(), &mut out)?;
    Ok(())
}

pub(crate) fn run_directory(args: DirectoryArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_directory(&mut out, &config.directory, args)
}

/// Listings come from the seed plus the configured lawyer export, as served.
fn write_directory<W: Write>(
    out: &mut W,
    config: &DirectoryConfig,
    args: DirectoryArgs,
) -> Result<(), AppError> {
    let directory = load_directory(config)?;

    match args {
        DirectoryArgs::Lawyers { search, specialty } => {
            let lawyers = directory.lawyers(&LawyerFilter { search, specialty })?;
            render_lawyers(out, &lawyers)?;
        }
        DirectoryArgs::LegalAid { service_type } => {
            let services = directory.legal_aid_services(&ServiceFilter { service_type })?;
            render_legal_aid(out, &services)?;
        }
        DirectoryArgs::Emergency => {
            let resources = directory.emergency_resources()?;
            render_emergency(out, &resources)?;
        }
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let directory = load_directory(&config.directory)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Legal help triage demo")?;
    for (label, answers) in demo_scenarios() {
        writeln!(out, "\nScenario: {label}")?;
        let recommendation = compute_recommendation(&answers);
        render_recommendation(&mut out, &recommendation)?;
        render_destination_preview(&mut out, &directory, recommendation.primary.destination)?;
    }
    Ok(())
}

fn demo_scenarios() -> Vec<(&'static str, AnswerSet)> {
    vec![
        (
            "Tenant facing eviction soon, sharing location",
            AnswerSet::new()
                .with(QuestionId::Topic, Topic::Landlord.token())
                .with(QuestionId::Urgency, Urgency::Soon.token())
                .with(QuestionId::Location, LocationPreference::ShareLocation.token()),
        ),
        (
            "Family matter, exploring options province-wide",
            AnswerSet::new()
                .with(QuestionId::Topic, Topic::Family.token())
                .with(QuestionId::Urgency, Urgency::Explore.token())
                .with(QuestionId::Location, LocationPreference::ProvinceWide.token()),
        ),
        (
            "Job conflict with immediate risk",
            AnswerSet::new()
                .with(QuestionId::Topic, Topic::Job.token())
                .with(QuestionId::Urgency, Urgency::Emergency.token())
                .with(QuestionId::Location, LocationPreference::ProvinceWide.token()),
        ),
        (
            "Consumer dispute, no urgency given",
            AnswerSet::new().with(QuestionId::Topic, Topic::Consumer.token()),
        ),
        ("Nothing answered", AnswerSet::new()),
    ]
}

fn render_destination_preview<W: Write>(
    out: &mut W,
    directory: &DirectoryService<InMemoryDirectory>,
    destination: Destination,
) -> Result<(), AppError> {
    match destination {
        Destination::EmergencyHelp => {
            let resources = directory.emergency_resources()?;
            writeln!(out, "  {} emergency contacts available", resources.len())?;
        }
        Destination::LegalAid => {
            let services = directory.legal_aid_services(&ServiceFilter::default())?;
            writeln!(out, "  {} legal-aid services listed", services.len())?;
        }
        Destination::LawyerDirectory => {
            let lawyers = directory.lawyers(&LawyerFilter::default())?;
            writeln!(out, "  {} lawyers listed", lawyers.len())?;
        }
    }
    Ok(())
}

/// Drive a quiz session from line-oriented input until the user quits, leaves
/// the first question, or input runs out.
pub(crate) fn drive_quiz<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
) -> Result<QuizSession, AppError> {
    let mut session = QuizSession::new();
    let mut line = String::new();

    loop {
        match session.current_question() {
            Some(question) => {
                writeln!(out, "\nQuestion {}: {}", session.progress(), question.title)?;
                let selected = session.selected();
                for (position, option) in question.options.iter().enumerate() {
                    let marker = if selected == Some(option.value) { "*" } else { " " };
                    writeln!(out, " {marker}{}. {}", position + 1, option.label)?;
                }
                write!(
                    out,
                    "Choose 1-{}, b to go back, q to quit: ",
                    question.options.len()
                )?;
            }
            None => {
                writeln!(out)?;
                render_recommendation(out, &session.result())?;
                write!(out, "r to retake, b to go back, q to quit: ")?;
            }
        }
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let entry = line.trim();

        match entry {
            "q" | "quit" => break,
            "b" | "back" => match session.back() {
                Ok(RetreatStep::Exit) => {
                    writeln!(out, "Leaving the quiz.")?;
                    break;
                }
                Ok(RetreatStep::Question(_)) => {}
                Err(err) => writeln!(out, "{err}")?,
            },
            "r" | "retake" if session.is_complete() => session.retake(),
            _ => {
                let Some(question) = session.current_question() else {
                    writeln!(out, "Unrecognised choice '{entry}'")?;
                    continue;
                };
                let token = entry
                    .parse::<usize>()
                    .ok()
                    .and_then(|position| position.checked_sub(1))
                    .and_then(|index| question.options.get(index))
                    .map_or(entry, |option| option.value);

                if let Err(err) = session.select(token).and_then(|_| session.next().map(|_| ())) {
                    writeln!(out, "{err}")?;
                }
            }
        }
    }

    Ok(session)
}

pub(crate) fn render_recommendation<W: Write>(
    out: &mut W,
    recommendation: &Recommendation,
) -> io::Result<()> {
    writeln!(out, "{}", recommendation.summary)?;
    for bullet in &recommendation.bullets {
        writeln!(out, "- {bullet}")?;
    }
    writeln!(
        out,
        "Primary: {} ({})",
        recommendation.primary.label, recommendation.primary.route
    )?;
    writeln!(
        out,
        "Secondary: {} ({})",
        recommendation.secondary.label, recommendation.secondary.route
    )
}

pub(crate) fn render_lawyers<W: Write>(out: &mut W, lawyers: &[Lawyer]) -> io::Result<()> {
    if lawyers.is_empty() {
        return writeln!(out, "No lawyers match those filters.");
    }

    for lawyer in lawyers {
        let rating = lawyer
            .rating
            .map(|rating| format!("{rating:.1}"))
            .unwrap_or_else(|| "unrated".to_string());
        writeln!(
            out,
            "{} | {} | {} | {} | rating {}{}",
            lawyer.name,
            lawyer.firm.as_deref().unwrap_or("Independent"),
            lawyer.specialties.join(", "),
            lawyer.phone,
            rating,
            if lawyer.accepts_legal_aid {
                " | accepts legal aid"
            } else {
                ""
            }
        )?;
    }
    Ok(())
}

pub(crate) fn render_legal_aid<W: Write>(
    out: &mut W,
    services: &[LegalAidService],
) -> io::Result<()> {
    if services.is_empty() {
        return writeln!(out, "No legal-aid services of that type.");
    }

    for service in services {
        writeln!(
            out,
            "{} [{}] {}",
            service.name,
            service.service_type.as_str(),
            service.phone
        )?;
        if let Some(hours) = &service.hours_of_operation {
            writeln!(out, "  hours: {hours}")?;
        }
    }
    Ok(())
}

pub(crate) fn render_emergency<W: Write>(
    out: &mut W,
    resources: &[LegalResource],
) -> io::Result<()> {
    writeln!(out, "If safety is at risk, call 911 immediately.")?;
    for resource in resources {
        let contact = resource
            .phone
            .as_deref()
            .or(resource.url.as_deref())
            .unwrap_or("see description");
        writeln!(out, "{}: {}", resource.title, contact)?;
    }
    Ok(())
}
