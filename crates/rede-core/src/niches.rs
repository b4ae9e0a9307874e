//! Read-only niche taxonomy: category → niche → ordered service names.
//!
//! Reference data for the report drill-down filters. Order is significant
//! (it is the order the filter dropdowns present) so the tree is vectors,
//! not maps.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// One niche (specialty label) and the services it groups.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Niche {
    pub name: String,
    pub services: Vec<String>,
}

/// The niches of one category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryNiches {
    pub category: Category,
    pub niches: Vec<Niche>,
}

/// Static two-level taxonomy over all four categories.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NicheTree {
    groups: Vec<CategoryNiches>,
}

impl NicheTree {
    #[must_use]
    pub fn new(groups: Vec<CategoryNiches>) -> Self {
        Self { groups }
    }

    /// Niches of a category, in presentation order. Empty for an
    /// unrepresented category.
    #[must_use]
    pub fn niches(&self, category: Category) -> &[Niche] {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map_or(&[], |g| g.niches.as_slice())
    }

    /// Niche names of a category, in presentation order.
    #[must_use]
    pub fn niche_names(&self, category: Category) -> Vec<&str> {
        self.niches(category)
            .iter()
            .map(|n| n.name.as_str())
            .collect()
    }

    /// Services of one niche within a category.
    #[must_use]
    pub fn services(&self, category: Category, niche: &str) -> Option<&[String]> {
        self.niches(category)
            .iter()
            .find(|n| n.name == niche)
            .map(|n| n.services.as_slice())
    }

    /// The standard RedePro taxonomy.
    #[must_use]
    pub fn standard() -> Self {
        fn niche(name: &str, services: &[&str]) -> Niche {
            Niche {
                name: name.to_string(),
                services: services.iter().map(ToString::to_string).collect(),
            }
        }

        Self::new(vec![
            CategoryNiches {
                category: Category::Saude,
                niches: vec![
                    niche(
                        "Odontologia",
                        &[
                            "Limpeza Dental Completa",
                            "Implantes",
                            "Ortodontia",
                            "Clareamento a Laser",
                            "Extração de Siso",
                            "Restauração Dentária",
                        ],
                    ),
                    niche("Fisioterapia", &["Respiratória", "Ortopédica", "Neurológica"]),
                    niche(
                        "Dermatologia",
                        &["Peeling Químico", "Aplicação de Toxina Botulínica", "Cirúrgica"],
                    ),
                    niche(
                        "Análises Clínicas",
                        &["Hemograma Completo", "Bioquímica", "Hematologia", "Microbiologia"],
                    ),
                    niche(
                        "Cardiologia",
                        &[
                            "Eletrocardiograma (ECG)",
                            "Teste Ergométrico",
                            "Ecocardiograma",
                            "Holter 24h",
                        ],
                    ),
                    niche(
                        "Clínica Geral",
                        &["Consulta de Rotina", "Check-up", "Atestado de Saúde Ocupacional"],
                    ),
                    niche(
                        "Pediatria",
                        &[
                            "Consulta Pediátrica de Rotina",
                            "Atendimento de Emergência Pediátrica",
                            "Vacinação",
                        ],
                    ),
                ],
            },
            CategoryNiches {
                category: Category::Estetica,
                niches: vec![
                    niche(
                        "Harmonização Facial",
                        &["Preenchimento Labial", "Toxina Botulínica", "Fios de Sustentação"],
                    ),
                    niche(
                        "Tratamentos Corporais",
                        &["Massagem Modeladora", "Drenagem Linfática", "Criolipólise"],
                    ),
                ],
            },
            CategoryNiches {
                category: Category::Educacao,
                niches: vec![
                    niche(
                        "Cursos de Idiomas",
                        &["Curso de Inglês Intensivo", "Espanhol", "Francês", "Alemão"],
                    ),
                    niche("Aulas de Reforço", &["Matemática", "Física", "Química"]),
                ],
            },
            CategoryNiches {
                category: Category::Lazer,
                niches: vec![
                    niche(
                        "Fitness",
                        &[
                            "Plano Anual Completo",
                            "Musculação",
                            "Treinamento Funcional",
                            "Aulas Coletivas",
                        ],
                    ),
                    niche(
                        "Clubes e Parques",
                        &["Acesso ao Clube", "Piscina", "Quadras Esportivas"],
                    ),
                ],
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_tree_covers_all_categories() {
        let tree = NicheTree::standard();
        for category in Category::ALL {
            assert!(!tree.niches(category).is_empty(), "{category} has no niches");
        }
    }

    #[test]
    fn service_lookup_by_category_and_niche() {
        let tree = NicheTree::standard();
        let services = tree.services(Category::Saude, "Odontologia").unwrap();
        assert!(services.contains(&"Limpeza Dental Completa".to_string()));
        assert_eq!(tree.services(Category::Saude, "Fitness"), None);
        assert!(tree.services(Category::Lazer, "Fitness").is_some());
    }

    #[test]
    fn niche_names_preserve_presentation_order() {
        let tree = NicheTree::standard();
        let names = tree.niche_names(Category::Saude);
        assert_eq!(names.first(), Some(&"Odontologia"));
        assert_eq!(names.last(), Some(&"Pediatria"));
    }
}
