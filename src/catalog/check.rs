//! Product check: classify a product name against the catalog.
//!
//! DESIGN
//! ======
//! Resolution order is fixed: exact boycott match, exact alternative match,
//! fuzzy "did you mean" hints, then unknown. The random pick of a suggested
//! alternative takes an injected RNG so callers (and tests) control it.

#[cfg(test)]
#[path = "check_test.rs"]
mod check_test;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::{Alternative, Catalog, same_label};

/// Hint lists in the "did you mean" message show at most this many names.
const DID_YOU_MEAN_LIMIT: usize = 2;

pub const SEVERITY_SAFE: &str = "safe";
pub const SEVERITY_UNKNOWN: &str = "unknown";

const MSG_BOYCOTTED: &str = "⚠️ Ce produit est sur la liste de boycott";
const MSG_ALTERNATIVE: &str = "✅ Excellent choix ! Ce produit est une alternative tunisienne recommandée 🇹🇳";
const MSG_DID_YOU_MEAN: &str = "❓ Produit non trouvé. Vouliez-vous dire :\n";
const MSG_UNKNOWN: &str = "❓ Produit inconnu - Non répertorié dans notre base de données";

const REASON_ALTERNATIVE_FOOTER: &str = "\n\nEn choisissant ce produit tunisien, vous :\n\
✓ Soutenez l'économie locale\n\
✓ Créez des emplois en Tunisie\n\
✓ Garantissez la qualité Made in Tunisia\n\
✓ Exprimez votre solidarité avec la Palestine";
const REASON_NOT_FOUND: &str = "Ce produit n'est pas dans notre base de données. \
Veuillez vérifier l'orthographe ou consulter la liste complète.";
const REASON_UNKNOWN: &str = "⚠️ ATTENTION : Ce produit n'est pas dans notre base de données actuelle. \
Cela ne signifie pas qu'il est sûr à consommer. \
\n\nNous vous recommandons de :\n\
• Vérifier la liste complète des produits boycottés\n\
• Consulter nos alternatives tunisiennes\n\
• Rechercher l'origine et les liens du fabricant\n\
• Privilégier les alternatives tunisiennes pour plus de sécurité\n\
• Nous contacter si vous avez des informations sur ce produit";
const SUGGESTION_KEEP_GOING: &str =
    "🇹🇳 Continuez à soutenir les produits tunisiens ! Consultez notre liste complète d'alternatives.";

/// Outcome of checking one product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub product_name: String,
    #[serde(rename = "boycotted")]
    pub is_boycotted: bool,
    /// Exact catalog hit; drives the result page and is not part of the JSON.
    #[serde(skip)]
    pub product_found: bool,
    pub suggestion: Option<String>,
    pub message: Option<String>,
    pub reason: Option<String>,
    /// Product severity when boycotted, otherwise `safe` or `unknown`.
    pub severity: String,
}

impl CheckResult {
    fn new(product_name: &str) -> Self {
        Self {
            product_name: product_name.to_owned(),
            is_boycotted: false,
            product_found: false,
            suggestion: None,
            message: None,
            reason: None,
            severity: "low".to_owned(),
        }
    }
}

impl Catalog {
    /// Classify `name` against the boycott list and alternatives.
    pub fn check<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> CheckResult {
        let mut result = CheckResult::new(name);
        let needle = name.trim();

        if let Some(product) = self.find_product(needle) {
            result.is_boycotted = true;
            result.product_found = true;
            result.message = Some(MSG_BOYCOTTED.to_owned());
            result.reason = Some(product.reason.clone());
            result.severity = product.severity.clone();

            let same_category: Vec<&Alternative> = self
                .alternatives
                .iter()
                .filter(|a| same_label(&a.category, &product.category))
                .collect();
            result.suggestion = same_category.choose(rng).map(|alt| describe(alt));
            return result;
        }

        if let Some(found) = self.find_alternative(needle) {
            result.product_found = true;
            result.message = Some(MSG_ALTERNATIVE.to_owned());
            result.severity = SEVERITY_SAFE.to_owned();
            result.reason = Some(format!("🇹🇳 {}{REASON_ALTERNATIVE_FOOTER}", found.description));

            let others: Vec<&Alternative> = self
                .alternatives
                .iter()
                .filter(|a| same_label(&a.category, &found.category) && !same_label(&a.name, needle))
                .collect();
            result.suggestion = Some(match others.choose(rng) {
                Some(other) => format!(
                    "💡 Autres produits tunisiens dans la catégorie {} : {}",
                    found.category,
                    describe(other)
                ),
                None => SUGGESTION_KEEP_GOING.to_owned(),
            });
            return result;
        }

        result.severity = SEVERITY_UNKNOWN.to_owned();
        let similar_products = self.fuzzy_search(name);
        let similar_alternatives = self.fuzzy_search_alternatives(name);

        if !similar_products.is_empty() || !similar_alternatives.is_empty() {
            let mut message = MSG_DID_YOU_MEAN.to_owned();
            if !similar_products.is_empty() {
                message.push_str("\n⚠️ Produits à boycotter : ");
                message.push_str(&join_names(similar_products.iter().map(|p| p.name.as_str())));
            }
            if !similar_alternatives.is_empty() {
                message.push_str("\n✅ Alternatives tunisiennes : ");
                message.push_str(&join_names(similar_alternatives.iter().map(|a| a.name.as_str())));
            }
            result.message = Some(message);
            result.reason = Some(REASON_NOT_FOUND.to_owned());
        } else {
            result.message = Some(MSG_UNKNOWN.to_owned());
            result.reason = Some(REASON_UNKNOWN.to_owned());
            result.suggestion = self
                .alternatives
                .choose(rng)
                .map(|alt| format!("💡 Conseil : Privilégiez les produits tunisiens comme {}", describe(alt)));
        }

        result
    }
}

fn describe(alt: &Alternative) -> String {
    format!("{} - {}", alt.name, alt.description)
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.take(DID_YOU_MEAN_LIMIT).collect::<Vec<_>>().join(", ")
}
