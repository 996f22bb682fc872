#[derive(Debug)]
pub enum APIMessages {
    // Generic
    BadRequest,
    NotFound,
    // Auth
    Auth(AuthMessages),
    // Catalog
    Catalog(CatalogMessages),
    // Subscription
    Subscription(SubscriptionMessages),
    // Checkout
    Checkout(CheckoutMessages),
    // Content
    Content(ContentMessages),
}

#[derive(Debug)]
pub enum AuthMessages {
    Required,
    ErrorRetrievingSession,
}

#[derive(Debug)]
pub enum CatalogMessages {
    Found,
    PlanNotFound,
}

#[derive(Debug)]
pub enum SubscriptionMessages {
    Found,
    Required,
}

#[derive(Debug)]
pub enum CheckoutMessages {
    Created,
    Failed,
    TimedOut,
    AlreadyInProgress,
    AlreadySubscribed,
    NotReady,
}

#[derive(Debug)]
pub enum ContentMessages {
    Found,
    InvalidDay,
    InvalidPeriod,
}

impl ToString for APIMessages {
    fn to_string(&self) -> String {
        match self {
            APIMessages::BadRequest => "generic.bad_request".to_string(),
            APIMessages::NotFound => "generic.not_found".to_string(),
            APIMessages::Auth(auth_message) => auth_message.to_string(),
            APIMessages::Catalog(catalog_message) => catalog_message.to_string(),
            APIMessages::Subscription(subscription_message) => subscription_message.to_string(),
            APIMessages::Checkout(checkout_message) => checkout_message.to_string(),
            APIMessages::Content(content_message) => content_message.to_string(),
        }
    }
}

impl ToString for AuthMessages {
    fn to_string(&self) -> String {
        match self {
            AuthMessages::Required => "auth.required".to_string(),
            AuthMessages::ErrorRetrievingSession => "auth.error_retrieving_session".to_string(),
        }
    }
}

impl ToString for CatalogMessages {
    fn to_string(&self) -> String {
        match self {
            CatalogMessages::Found => "catalog.found".to_string(),
            CatalogMessages::PlanNotFound => "catalog.plan_not_found".to_string(),
        }
    }
}

impl ToString for SubscriptionMessages {
    fn to_string(&self) -> String {
        match self {
            SubscriptionMessages::Found => "subscription.found".to_string(),
            SubscriptionMessages::Required => "subscription.required".to_string(),
        }
    }
}

impl ToString for CheckoutMessages {
    fn to_string(&self) -> String {
        match self {
            CheckoutMessages::Created => "checkout.created".to_string(),
            CheckoutMessages::Failed => "checkout.failed".to_string(),
            CheckoutMessages::TimedOut => "checkout.timed_out".to_string(),
            CheckoutMessages::AlreadyInProgress => "checkout.already_in_progress".to_string(),
            CheckoutMessages::AlreadySubscribed => "checkout.already_subscribed".to_string(),
            CheckoutMessages::NotReady => "checkout.not_ready".to_string(),
        }
    }
}

impl ToString for ContentMessages {
    fn to_string(&self) -> String {
        match self {
            ContentMessages::Found => "content.found".to_string(),
            ContentMessages::InvalidDay => "content.invalid_day".to_string(),
            ContentMessages::InvalidPeriod => "content.invalid_period".to_string(),
        }
    }
}
