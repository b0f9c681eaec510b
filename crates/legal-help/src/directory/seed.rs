//! Sample Alberta directory used to bootstrap an empty store.

use chrono::{DateTime, Utc};

use super::domain::{
    Catalog, Category, Lawyer, LegalAidService, LegalResource, RecordId, ResourceKind,
    ServiceType,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// The complete sample catalog, stamped with `now`.
pub fn catalog(now: DateTime<Utc>) -> Catalog {
    Catalog {
        categories: categories(now),
        lawyers: lawyers(now),
        legal_aid_services: legal_aid_services(now),
        legal_resources: legal_resources(now),
    }
}

pub fn categories(now: DateTime<Utc>) -> Vec<Category> {
    let entries: [(&str, &str, &str, &str, bool); 8] = [
        (
            "Emergency Legal Help",
            "Immediate legal assistance for urgent situations",
            "warning",
            "#F44336",
            true,
        ),
        (
            "Family Law",
            "Divorce, custody, support, and family violence",
            "home",
            "#739877",
            false,
        ),
        (
            "Criminal Law",
            "Criminal charges, court proceedings, and legal rights",
            "shield",
            "#739877",
            false,
        ),
        (
            "Employment Law",
            "Workplace rights, wrongful dismissal, and employment standards",
            "briefcase",
            "#739877",
            false,
        ),
        (
            "Housing & Landlord-Tenant",
            "Rental issues, evictions, and housing rights",
            "home",
            "#739877",
            false,
        ),
        (
            "Immigration Law",
            "Immigration applications, refugee claims, and citizenship",
            "globe",
            "#739877",
            false,
        ),
        (
            "Personal Injury",
            "Motor vehicle accidents, slip and fall, and insurance claims",
            "medical",
            "#739877",
            false,
        ),
        (
            "Legal Aid Services",
            "Free and low-cost legal services for qualifying individuals",
            "heart",
            "#739877",
            false,
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(
            |(index, (name, description, icon, color, is_emergency))| Category {
                id: RecordId(format!("category-{:02}", index + 1)),
                name: name.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                color: color.to_string(),
                is_emergency,
                created_at: now,
            },
        )
        .collect()
}

pub fn lawyers(now: DateTime<Utc>) -> Vec<Lawyer> {
    vec![
        Lawyer {
            id: RecordId::new("lawyer-01"),
            name: "Sarah Johnson".to_string(),
            firm: text("Johnson & Associates"),
            specialties: strings(&["Family Law", "Divorce", "Child Custody"]),
            phone: "403-555-0123".to_string(),
            email: text("sarah@johnsonlaw.ca"),
            address: text("1234 Main St SW, Calgary, AB T2T 1A1"),
            website: text("https://www.johnsonlaw.ca"),
            rating: Some(4.8),
            review_count: Some(45),
            accepts_legal_aid: true,
            languages: strings(&["English", "French"]),
            years_of_experience: Some(12),
            created_at: now,
        },
        Lawyer {
            id: RecordId::new("lawyer-02"),
            name: "Michael Chen".to_string(),
            firm: text("Chen Legal Services"),
            specialties: strings(&["Criminal Law", "DUI", "Traffic Violations"]),
            phone: "403-555-0456".to_string(),
            email: text("michael@chenlegal.ca"),
            address: text("5678 Centre St N, Calgary, AB T2E 2R5"),
            website: text("https://www.chenlegal.ca"),
            rating: Some(4.6),
            review_count: Some(32),
            accepts_legal_aid: true,
            languages: strings(&["English", "Mandarin", "Cantonese"]),
            years_of_experience: Some(8),
            created_at: now,
        },
        Lawyer {
            id: RecordId::new("lawyer-03"),
            name: "Emma Rodriguez".to_string(),
            firm: text("Rodriguez Employment Law"),
            specialties: strings(&["Employment Law", "Wrongful Dismissal", "Human Rights"]),
            phone: "403-555-0789".to_string(),
            email: text("emma@rodriguezlaw.ca"),
            address: text("9012 17th Ave SW, Calgary, AB T3C 0J5"),
            website: None,
            rating: Some(4.9),
            review_count: Some(28),
            accepts_legal_aid: false,
            languages: strings(&["English", "Spanish"]),
            years_of_experience: Some(15),
            created_at: now,
        },
        Lawyer {
            id: RecordId::new("lawyer-04"),
            name: "David Thompson".to_string(),
            firm: text("Thompson & Partners"),
            specialties: strings(&[
                "Personal Injury",
                "Motor Vehicle Accidents",
                "Insurance Claims",
            ]),
            phone: "403-555-0321".to_string(),
            email: text("david@thompsonpartners.ca"),
            address: text("3456 4th St NE, Calgary, AB T2E 3M7"),
            website: text("https://www.thompsonpartners.ca"),
            rating: Some(4.7),
            review_count: Some(67),
            accepts_legal_aid: true,
            languages: strings(&["English"]),
            years_of_experience: Some(20),
            created_at: now,
        },
        Lawyer {
            id: RecordId::new("lawyer-05"),
            name: "Lisa Patel".to_string(),
            firm: text("Patel Immigration Law"),
            specialties: strings(&["Immigration Law", "Refugee Law", "Citizenship"]),
            phone: "403-555-0654".to_string(),
            email: text("lisa@patelimmigration.ca"),
            address: text("7890 Macleod Trail S, Calgary, AB T2H 0L3"),
            website: text("https://www.patelimmigration.ca"),
            rating: Some(4.5),
            review_count: Some(41),
            accepts_legal_aid: true,
            languages: strings(&["English", "Hindi", "Gujarati"]),
            years_of_experience: Some(10),
            created_at: now,
        },
        Lawyer {
            id: RecordId::new("lawyer-06"),
            name: "Robert Anderson".to_string(),
            firm: text("Anderson Real Estate Law"),
            specialties: strings(&["Real Estate", "Property Law", "Construction Law"]),
            phone: "403-555-0987".to_string(),
            email: text("robert@andersonrealestate.ca"),
            address: text("2345 Kensington Rd NW, Calgary, AB T2N 3T5"),
            website: None,
            rating: Some(4.4),
            review_count: Some(23),
            accepts_legal_aid: false,
            languages: strings(&["English"]),
            years_of_experience: Some(18),
            created_at: now,
        },
    ]
}

pub fn legal_aid_services(now: DateTime<Utc>) -> Vec<LegalAidService> {
    vec![
        LegalAidService {
            id: RecordId::new("legal-aid-01"),
            name: "Legal Aid Alberta - Calgary Office".to_string(),
            description: "Free legal services for qualifying low-income individuals and families"
                .to_string(),
            service_type: ServiceType::Clinic,
            phone: "403-297-2260".to_string(),
            email: text("calgary@legalaid.ab.ca"),
            address: text("1019 7th Ave SW, Calgary, AB T2P 1A8"),
            website: text("https://www.legalaid.ab.ca"),
            hours_of_operation: text("Monday-Friday 8:30 AM - 4:30 PM"),
            eligibility_requirements: text("Must meet income and asset guidelines"),
            areas_of_law: strings(&["Family Law", "Criminal Law", "Immigration", "Housing"]),
            is_walk_in_available: true,
            appointment_required: false,
            languages: strings(&["English", "French", "Spanish", "Mandarin"]),
            created_at: now,
        },
        LegalAidService {
            id: RecordId::new("legal-aid-02"),
            name: "Student Legal Assistance".to_string(),
            description: "Free legal clinic run by law students under supervision".to_string(),
            service_type: ServiceType::Clinic,
            phone: "403-220-6637".to_string(),
            email: text("sla@ucalgary.ca"),
            address: text("University of Calgary, 2500 University Dr NW, Calgary, AB T2N 1N4"),
            website: text("https://www.ucalgary.ca/student-legal-assistance"),
            hours_of_operation: text("Monday-Thursday 9:00 AM - 4:00 PM"),
            eligibility_requirements: text("Available to all community members"),
            areas_of_law: strings(&[
                "Landlord-Tenant",
                "Employment",
                "Consumer Protection",
                "Family Law",
            ]),
            is_walk_in_available: false,
            appointment_required: true,
            languages: strings(&["English"]),
            created_at: now,
        },
        LegalAidService {
            id: RecordId::new("legal-aid-03"),
            name: "Calgary Women's Emergency Shelter Legal Clinic".to_string(),
            description: "Legal services for women experiencing domestic violence".to_string(),
            service_type: ServiceType::Clinic,
            phone: "403-234-7233".to_string(),
            email: None,
            address: text("1715 17th Ave SE, Calgary, AB T2G 1H7"),
            website: None,
            hours_of_operation: text("By appointment only"),
            eligibility_requirements: text("Women experiencing or fleeing domestic violence"),
            areas_of_law: strings(&["Family Law", "Criminal Law", "Immigration", "Housing"]),
            is_walk_in_available: false,
            appointment_required: true,
            languages: strings(&["English", "French", "Spanish"]),
            created_at: now,
        },
        LegalAidService {
            id: RecordId::new("legal-aid-04"),
            name: "Dial-A-Law".to_string(),
            description: "Free recorded legal information available 24/7".to_string(),
            service_type: ServiceType::Hotline,
            phone: "403-234-9266".to_string(),
            email: None,
            address: None,
            website: text("https://www.cplea.ca/dial-a-law/"),
            hours_of_operation: text("24/7 recorded information"),
            eligibility_requirements: text("Available to all Albertans"),
            areas_of_law: strings(&[
                "General Legal Information",
                "Family Law",
                "Criminal Law",
                "Employment",
            ]),
            is_walk_in_available: false,
            appointment_required: false,
            languages: strings(&["English"]),
            created_at: now,
        },
        LegalAidService {
            id: RecordId::new("legal-aid-05"),
            name: "Alberta Law Line".to_string(),
            description: "Free legal information and referral service".to_string(),
            service_type: ServiceType::Hotline,
            phone: "1-888-451-4999".to_string(),
            email: None,
            address: None,
            website: text("https://www.lawline.ab.ca"),
            hours_of_operation: text("Monday-Friday 9:00 AM - 4:00 PM"),
            eligibility_requirements: text("Available to all Albertans"),
            areas_of_law: strings(&[
                "General Legal Information",
                "Referrals",
                "Self-Help Resources",
            ]),
            is_walk_in_available: false,
            appointment_required: false,
            languages: strings(&["English"]),
            created_at: now,
        },
        LegalAidService {
            id: RecordId::new("legal-aid-06"),
            name: "Indigenous Legal Clinic".to_string(),
            description: "Legal services specifically for Indigenous community members"
                .to_string(),
            service_type: ServiceType::Clinic,
            phone: "403-538-7400".to_string(),
            email: None,
            address: text("140 10th Ave SE, Calgary, AB T2G 0R1"),
            website: None,
            hours_of_operation: text("Monday-Friday 9:00 AM - 5:00 PM"),
            eligibility_requirements: text("Indigenous community members"),
            areas_of_law: strings(&[
                "Family Law",
                "Criminal Law",
                "Child Welfare",
                "Treaty Rights",
            ]),
            is_walk_in_available: true,
            appointment_required: false,
            languages: strings(&["English", "Cree", "Blackfoot"]),
            created_at: now,
        },
    ]
}

pub fn legal_resources(now: DateTime<Utc>) -> Vec<LegalResource> {
    vec![
        LegalResource {
            id: RecordId::new("resource-01"),
            title: "Legal Aid Alberta".to_string(),
            description: "Free legal services for low-income Albertans".to_string(),
            category: "Legal Aid".to_string(),
            kind: ResourceKind::Resource,
            url: text("https://www.legalaid.ab.ca"),
            phone: text("1-866-845-3425"),
            email: text("info@legalaid.ab.ca"),
            address: text("Edmonton, Calgary, and other locations"),
            tags: strings(&["free", "low-income", "general"]),
            is_emergency: false,
            is_free: true,
            created_at: now,
        },
        LegalResource {
            id: RecordId::new("resource-02"),
            title: "Family Violence Info Line".to_string(),
            description: "24/7 confidential support for family violence".to_string(),
            category: "Family Law".to_string(),
            kind: ResourceKind::Resource,
            url: None,
            phone: text("310-1818"),
            email: None,
            address: None,
            tags: strings(&["family", "violence", "emergency", "24/7"]),
            is_emergency: true,
            is_free: true,
            created_at: now,
        },
        LegalResource {
            id: RecordId::new("resource-03"),
            title: "Alberta Human Rights Commission".to_string(),
            description: "Information and complaint process for human rights violations"
                .to_string(),
            category: "Human Rights".to_string(),
            kind: ResourceKind::Resource,
            url: text("https://www.albertahumanrights.ab.ca"),
            phone: text("780-427-7661"),
            email: text("humanrights@gov.ab.ca"),
            address: text("800 6th Avenue SW, Calgary"),
            tags: strings(&["discrimination", "human rights", "complaints"]),
            is_emergency: false,
            is_free: true,
            created_at: now,
        },
        LegalResource {
            id: RecordId::new("resource-04"),
            title: "Landlord and Tenant Advisory Board".to_string(),
            description: "Information about rental housing rights and responsibilities"
                .to_string(),
            category: "Housing".to_string(),
            kind: ResourceKind::Resource,
            url: text("https://www.alberta.ca/landlord-tenant-advisory-board.aspx"),
            phone: text("780-644-3000"),
            email: None,
            address: text("Edmonton and Calgary offices"),
            tags: strings(&["rental", "housing", "landlord", "tenant"]),
            is_emergency: false,
            is_free: true,
            created_at: now,
        },
        LegalResource {
            id: RecordId::new("resource-05"),
            title: "Employment Standards Information".to_string(),
            description: "Workplace rights and employment law information".to_string(),
            category: "Employment".to_string(),
            kind: ResourceKind::Resource,
            url: text("https://www.alberta.ca/employment-standards.aspx"),
            phone: text("780-427-3731"),
            email: text("employmentstandards@gov.ab.ca"),
            address: None,
            tags: strings(&["employment", "workplace", "rights"]),
            is_emergency: false,
            is_free: true,
            created_at: now,
        },
        LegalResource {
            id: RecordId::new("resource-06"),
            title: "Alberta Motor Vehicle Accident Claims".to_string(),
            description: "Information about motor vehicle accident claims and insurance"
                .to_string(),
            category: "Motor Vehicle".to_string(),
            kind: ResourceKind::Resource,
            url: text("https://www.alberta.ca/motor-vehicle-accident-claims.aspx"),
            phone: text("780-427-7013"),
            email: None,
            address: None,
            tags: strings(&["motor vehicle", "accident", "insurance", "claims"]),
            is_emergency: false,
            is_free: true,
            created_at: now,
        },
        LegalResource {
            id: RecordId::new("resource-07"),
            title: "Criminal Law Self-Help Guide".to_string(),
            description: "Understanding criminal law processes and your rights".to_string(),
            category: "Criminal Law".to_string(),
            kind: ResourceKind::Guide,
            url: text("https://www.cplea.ca/criminal-law/"),
            phone: None,
            email: None,
            address: None,
            tags: strings(&["criminal", "self-help", "guide"]),
            is_emergency: false,
            is_free: true,
            created_at: now,
        },
        LegalResource {
            id: RecordId::new("resource-08"),
            title: "Duty Counsel Services".to_string(),
            description: "Free legal advice for people appearing in court without a lawyer"
                .to_string(),
            category: "Criminal Law".to_string(),
            kind: ResourceKind::Resource,
            url: None,
            phone: text("Check with local courthouse"),
            email: None,
            address: None,
            tags: strings(&["criminal", "court", "free", "counsel"]),
            is_emergency: true,
            is_free: true,
            created_at: now,
        },
    ]
}
