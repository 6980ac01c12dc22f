use crate::error::ConfigurationError;
use crate::parts::{BodyPart, PriceTable, MAX_CREEP_SIZE};
use crate::selector::select_best;
use arrayvec::ArrayVec;
use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};

pub type Body = ArrayVec<[BodyPart; MAX_CREEP_SIZE]>;

/// A buildable creep configuration.
///
/// `cost` is derived from `body` when the template is built and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    category: String,
    size: String,
    body: Body,
    cost: u32,
}

impl Template {
    pub fn new(
        category: impl Into<String>,
        size: impl Into<String>,
        parts: &[BodyPart],
        prices: &PriceTable,
    ) -> Result<Self, ConfigurationError> {
        let category = category.into();
        let size = size.into();
        if parts.is_empty() {
            return Err(ConfigurationError::EmptyBody { category, size });
        }
        if parts.len() > MAX_CREEP_SIZE {
            return Err(ConfigurationError::BodyTooLarge {
                category,
                size,
                len: parts.len(),
                max: MAX_CREEP_SIZE,
            });
        }
        let cost = match prices.checked_cost_of(parts) {
            Some(cost) => cost,
            None => return Err(ConfigurationError::CostOverflow { category, size }),
        };
        let body: Body = parts.iter().copied().collect();
        Ok(Self {
            category,
            size,
            body,
            cost,
        })
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    pub fn size(&self) -> &str {
        self.size.as_str()
    }

    pub fn body(&self) -> &[BodyPart] {
        &self.body[..]
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

/// Template as written in the configuration file. The cost is computed when it is turned into a
/// [Template].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub category: String,
    pub size: String,
    pub body: Vec<BodyPart>,
}

impl TemplateConfig {
    pub fn new(category: &str, size: &str, body: &[BodyPart]) -> Self {
        Self {
            category: category.to_owned(),
            size: size.to_owned(),
            body: body.to_vec(),
        }
    }

    pub fn build(&self, prices: &PriceTable) -> Result<Template, ConfigurationError> {
        Template::new(
            self.category.as_str(),
            self.size.as_str(),
            self.body.as_slice(),
            prices,
        )
    }
}

/// The worker templates every colony starts with
pub fn default_template_configs() -> Vec<TemplateConfig> {
    use BodyPart::{Carry, Move, Work};

    vec![
        TemplateConfig::new("worker", "small", &[Work, Carry, Move]),
        TemplateConfig::new("worker", "medium", &[Work, Work, Carry, Carry, Move, Move]),
        TemplateConfig::new(
            "worker",
            "large",
            &[Work, Work, Work, Carry, Carry, Carry, Move, Move, Move],
        ),
    ]
}

lazy_static! {
    static ref DEFAULT_CATALOG: Catalog =
        Catalog::from_configs(&default_template_configs(), &PriceTable::DEFAULT)
            .expect("default catalog is valid");
}

/// Ordered, immutable collection of templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn from_configs(
        configs: &[TemplateConfig],
        prices: &PriceTable,
    ) -> Result<Self, ConfigurationError> {
        let templates = configs
            .iter()
            .map(|conf| conf.build(prices))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { templates })
    }

    /// Catalog built from [default_template_configs] with the default prices
    pub fn default_catalog() -> &'static Catalog {
        &DEFAULT_CATALOG
    }

    pub fn templates(&self) -> &[Template] {
        self.templates.as_slice()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.templates.len());
        for t in self.templates.iter() {
            if !seen.contains(&t.category()) {
                seen.push(t.category());
            }
        }
        seen.into_iter()
    }

    pub fn select_best(&self, category: &str, max_cost: i64) -> Option<&Template> {
        select_best(category, max_cost, self.templates.as_slice())
    }
}
