use chrono::Utc;
use tracing::info;

use perkstack_domain::id::DealId;

use crate::domain::repository::DealRepository;
use crate::domain::types::Deal;
use crate::error::ApiError;

struct PartnerDeal {
    title: &'static str,
    description: &'static str,
    partner_name: &'static str,
    category: &'static str,
    is_locked: bool,
    logo_url: &'static str,
    discount_value: &'static str,
    conditions: &'static str,
}

const PARTNER_DEALS: [PartnerDeal; 12] = [
    PartnerDeal {
        title: "AWS Credits",
        description: "$5000 in AWS Cloud Credits for 2 years. Keep your startup running with the world's leading cloud provider.",
        partner_name: "AWS",
        category: "Cloud",
        is_locked: true,
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg",
        discount_value: "$5000 Credits",
        conditions: "Valid for new accounts only. Must optionally have raised funding.",
    },
    PartnerDeal {
        title: "Notion Plus",
        description: "6 Months Free on Notion Plus Plan. Organize your work and knowledge in one place.",
        partner_name: "Notion",
        category: "Productivity",
        is_locked: false,
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/4/45/Notion_app_logo.png",
        discount_value: "6 Months Free",
        conditions: "New workspaces only.",
    },
    PartnerDeal {
        title: "HubSpot for Startups",
        description: "90% off HubSpot for eligible startups. Powerful CRM and marketing tools to grow your business.",
        partner_name: "HubSpot",
        category: "Marketing",
        is_locked: true,
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/1/15/HubSpot_Logo.png",
        discount_value: "90% Off",
        conditions: "Must be a venture-backed startup.",
    },
    PartnerDeal {
        title: "Miro Team",
        description: "$1000 credit for Miro Team Plan. The online collaborative whiteboard platform.",
        partner_name: "Miro",
        category: "Productivity",
        is_locked: false,
        logo_url: "https://cdn.worldvectorlogo.com/logos/miro-2.svg",
        discount_value: "$1000 Credit",
        conditions: "Valid for new teams.",
    },
    PartnerDeal {
        title: "Google Cloud",
        description: "Up to $200,000 in Google Cloud credits. Scale your infrastructure with Google's powerful tools.",
        partner_name: "Google Cloud",
        category: "Cloud",
        is_locked: true,
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/5/51/Google_Cloud_logo.svg",
        discount_value: "$200k Credits",
        conditions: "Series A or higher.",
    },
    PartnerDeal {
        title: "Linear",
        description: "6 Months free on the Standard plan. Issue tracking built for high-performance engineering teams.",
        partner_name: "Linear",
        category: "Productivity",
        is_locked: false,
        logo_url: "https://cdn.worldvectorlogo.com/logos/linear.svg",
        discount_value: "6 Months Free",
        conditions: "New workspaces only.",
    },
    PartnerDeal {
        title: "Segment",
        description: "$50,000 in annual credits for Segment Team Plan. Collect, clean, and control your customer data.",
        partner_name: "Segment",
        category: "Analytics",
        is_locked: true,
        logo_url: "https://cdn.worldvectorlogo.com/logos/segment.svg",
        discount_value: "$50k Credits",
        conditions: "Early stage startups only.",
    },
    PartnerDeal {
        title: "Mixpanel",
        description: "$50,000 in credits for one year. Powerful self-serve product analytics to help you convert, engage, and retain more users.",
        partner_name: "Mixpanel",
        category: "Analytics",
        is_locked: false,
        logo_url: "https://cdn.worldvectorlogo.com/logos/mixpanel.svg",
        discount_value: "$50k Credits",
        conditions: "New customers only.",
    },
    PartnerDeal {
        title: "Vercel",
        description: "$2,000 in credits for Pro or Enterprise plans. Develop. Preview. Ship.",
        partner_name: "Vercel",
        category: "DevTools",
        is_locked: false,
        logo_url: "https://assets.vercel.com/image/upload/v1588805858/repositories/vercel/logo.png",
        discount_value: "$2000 Credits",
        conditions: "New teams only.",
    },
    PartnerDeal {
        title: "Stripe",
        description: "$50,000 in volume fee-free processing. Financial infrastructure for the internet.",
        partner_name: "Stripe",
        category: "Finance",
        is_locked: true,
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/b/ba/Stripe_Logo%2C_revised_2016.svg",
        discount_value: "Fee-Free Processing",
        conditions: "New accounts only.",
    },
    PartnerDeal {
        title: "OpenAI",
        description: "$2500 in API credits. Build next-gen apps with GPT-4 and more.",
        partner_name: "OpenAI",
        category: "AI",
        is_locked: true,
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/4/4d/OpenAI_Logo.svg",
        discount_value: "$2500 Credits",
        conditions: "Application required.",
    },
    PartnerDeal {
        title: "Typeform",
        description: "6 months free on the Plus plan. Create forms and surveys that people enjoy answering.",
        partner_name: "Typeform",
        category: "Marketing",
        is_locked: false,
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/f/f7/Typeform_Logo.svg",
        discount_value: "6 Months Free",
        conditions: "New users only.",
    },
];

/// The fixed partner catalog with fresh ids.
///
/// Ids are v7 and timestamps advance by one millisecond per entry so that
/// insertion order survives the `created_at, id` ordering of listings.
pub fn partner_catalog() -> Vec<Deal> {
    let base = Utc::now();
    PARTNER_DEALS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let at = base + chrono::Duration::milliseconds(i as i64);
            Deal {
                id: DealId::new(),
                title: p.title.to_owned(),
                description: p.description.to_owned(),
                partner_name: p.partner_name.to_owned(),
                logo_url: Some(p.logo_url.to_owned()),
                conditions: Some(p.conditions.to_owned()),
                is_locked: p.is_locked,
                category: p.category.to_owned(),
                partner_link: None,
                discount_value: Some(p.discount_value.to_owned()),
                created_at: at,
                updated_at: at,
            }
        })
        .collect()
}

// ── SeedCatalog ──────────────────────────────────────────────────────────────

pub struct SeedCatalogUseCase<D: DealRepository> {
    pub deals: D,
}

impl<D: DealRepository> SeedCatalogUseCase<D> {
    /// Replace the whole catalog. Existing claims are removed with their deals.
    pub async fn execute(&self) -> Result<u64, ApiError> {
        let catalog = partner_catalog();
        let count = self.deals.replace_all(&catalog).await?;
        info!(count, "deal catalog seeded");
        Ok(count)
    }
}
