//! Seed dataset for the RedePro network.
//!
//! The mock data the dashboard boots with. Registration timestamps are
//! offsets from an injected reference instant so tests can pin them; the
//! activity log is sorted newest-first after construction.

use chrono::{DateTime, Duration, Months, Utc};

use rede_core::entities::{ActivityLogEntry, Exam, Partner, Professional, ProfessionalLink};
use rede_core::enums::{ActivityAction, Category, Status};
use rede_core::niches::NicheTree;

use crate::store::ADMIN_USER;

/// Everything a [`crate::NetworkStore`] starts from.
pub struct SeedData {
    pub partners: Vec<Partner>,
    pub professionals: Vec<Professional>,
    pub activity_log: Vec<ActivityLogEntry>,
    pub niche_tree: NicheTree,
    /// First counter value for newly minted IDs.
    pub next_id: u64,
}

impl SeedData {
    /// No entities, standard taxonomy.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            partners: Vec::new(),
            professionals: Vec::new(),
            activity_log: Vec::new(),
            niche_tree: NicheTree::standard(),
            next_id: 1,
        }
    }

    /// The standard mock dataset: ten partners, nine professionals, eleven
    /// activity entries.
    #[must_use]
    pub fn mock(now: DateTime<Utc>) -> Self {
        let partners = mock_partners(now);
        let professionals = mock_professionals(now);
        let mut activity_log = mock_activity_log(now);
        activity_log.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            partners,
            professionals,
            activity_log,
            niche_tree: NicheTree::standard(),
            next_id: 1,
        }
    }
}

fn link(id: &str, professional_id: &str, price: &str, discount: &str, observation: &str) -> ProfessionalLink {
    ProfessionalLink {
        id: id.to_string(),
        professional_id: professional_id.to_string(),
        price: price.to_string(),
        discount: discount.to_string(),
        observation: observation.to_string(),
        status: Status::Ativo,
    }
}

fn exam(
    id: &str,
    name: &str,
    nomenclature: &str,
    discount: &str,
    observations: &str,
    status: Status,
    professional_id: Option<&str>,
) -> Exam {
    Exam {
        id: id.to_string(),
        name: name.to_string(),
        nomenclature: nomenclature.to_string(),
        discount: discount.to_string(),
        observations: observations.to_string(),
        status,
        professional_id: professional_id.map(ToString::to_string),
    }
}

#[allow(clippy::too_many_lines)]
fn mock_partners(now: DateTime<Utc>) -> Vec<Partner> {
    let partner = |id: &str,
                   name: &str,
                   category: Category,
                   kind: &str,
                   cnpj: &str,
                   contact: &str,
                   city: &str,
                   address: &str,
                   status: Status,
                   niche: &str,
                   logo_url: &str,
                   links: Vec<ProfessionalLink>,
                   exams: Vec<Exam>,
                   registered_at: DateTime<Utc>| Partner {
        id: id.to_string(),
        name: name.to_string(),
        category,
        kind: kind.to_string(),
        cnpj: cnpj.to_string(),
        contact: contact.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        status,
        niche: niche.to_string(),
        logo_url: Some(logo_url.to_string()),
        exams,
        affiliated_professionals: links,
        registered_at,
    };

    vec![
        partner(
            "est-1",
            "Clínica Sorriso Feliz",
            Category::Saude,
            "Clínica",
            "12.345.678/0001-99",
            "(11) 98765-4321",
            "São Paulo",
            "Av. Paulista, 1000, Bela Vista, São Paulo - SP",
            Status::Ativo,
            "Odontologia",
            "https://placehold.co/128x128/EBF4FF/76A9EA.png",
            vec![link("aff-1", "prof-1", "R$ 200,00", "10% no plano", "Atende apenas particular.")],
            vec![
                exam("ex1-1", "Limpeza Dental Completa", "ODT001", "20%", "Inclui aplicação de flúor.", Status::Ativo, Some("prof-1")),
                exam("ex1-2", "Extração de Siso", "ODT004", "10%", "Requer avaliação prévia.", Status::Ativo, Some("prof-1")),
                exam("ex1-3", "Restauração Dentária", "ODT005", "15%", "Uso de resina composta.", Status::Ativo, Some("prof-1")),
                exam("ex1-4", "Clareamento a Laser", "ODT002", "R$ 150,00", "Desconto na primeira sessão.", Status::Inativo, None),
            ],
            now - Duration::days(5),
        ),
        partner(
            "est-2",
            "Laboratório Vida & Saúde",
            Category::Saude,
            "Laboratório",
            "98.765.432/0001-11",
            "(21) 91234-5678",
            "Rio de Janeiro",
            "R. da Glória, 123, Glória, Rio de Janeiro - RJ",
            Status::Inativo,
            "Análises Clínicas",
            "https://placehold.co/128x128/FFF4E5/FFA82B.png",
            vec![],
            vec![exam("ex2-1", "Hemograma Completo", "LAB001", "10%", "Não necessita de jejum.", Status::Ativo, None)],
            now - Duration::days(80),
        ),
        partner(
            "est-3",
            "Hospital Central",
            Category::Saude,
            "Hospital",
            "55.444.333/0001-22",
            "(31) 99999-8888",
            "Belo Horizonte",
            "Av. Afonso Pena, 500, Centro, Belo Horizonte - MG",
            Status::Ativo,
            "Dermatologia",
            "https://placehold.co/128x128/F0F9FF/3B82F6.png",
            vec![link("aff-2", "prof-3", "R$ 400,00", "Convênio X", "Atendimento com hora marcada.")],
            vec![
                exam("ex3-1", "Peeling Químico", "DER001", "10%", "Consulta de avaliação gratuita.", Status::Ativo, Some("prof-3")),
                exam("ex3-2", "Aplicação de Toxina Botulínica", "DER002", "R$ 200,00", "Por área aplicada.", Status::Ativo, Some("prof-3")),
            ],
            now - Months::new(5),
        ),
        partner(
            "est-4",
            "Orto Center",
            Category::Saude,
            "Clínica",
            "11.222.333/0001-44",
            "(51) 98888-7777",
            "Porto Alegre",
            "R. dos Andradas, 700, Centro Histórico, Porto Alegre - RS",
            Status::Ativo,
            "Odontologia",
            "https://placehold.co/128x128/F3E8FF/A855F7.png",
            vec![link("aff-3", "prof-1", "R$ 150,00", "", "Apenas manutenção.")],
            vec![exam("ex4-1", "Manutenção de Aparelho Ortodôntico", "ODT003", "5%", "Pagamento em dia.", Status::Ativo, Some("prof-1"))],
            now - Duration::days(25),
        ),
        partner(
            "est-5",
            "Bella Pele Estética Avançada",
            Category::Estetica,
            "Clínica de Estética",
            "22.333.444/0001-55",
            "(11) 91111-2222",
            "São Paulo",
            "R. Oscar Freire, 500, Jardins, São Paulo - SP",
            Status::Ativo,
            "Harmonização Facial",
            "https://placehold.co/128x128/FEF2F2/EF4444.png",
            vec![link("aff-4", "prof-5", "R$ 1.200,00", "10%", "Pacote com 3 sessões.")],
            vec![exam("ex5-1", "Preenchimento Labial", "EST001", "10%", "Uso de ácido hialurônico.", Status::Ativo, Some("prof-5"))],
            now - Duration::days(3),
        ),
        partner(
            "est-6",
            "Crescer Cursos",
            Category::Educacao,
            "Escola de Idiomas",
            "33.444.555/0001-66",
            "(41) 93333-4444",
            "Curitiba",
            "Av. Batel, 1230, Batel, Curitiba - PR",
            Status::Ativo,
            "Cursos de Idiomas",
            "https://placehold.co/128x128/ECFEFF/0891B2.png",
            vec![],
            vec![exam("ex6-1", "Curso de Inglês Intensivo", "EDU001", "15%", "Duração de 6 meses.", Status::Ativo, None)],
            now - Duration::days(45),
        ),
        partner(
            "est-7",
            "Academia Corpo em Movimento",
            Category::Lazer,
            "Academia",
            "44.555.666/0001-77",
            "(71) 95555-6666",
            "Salvador",
            "Av. Oceânica, 2400, Ondina, Salvador - BA",
            Status::Inativo,
            "Fitness",
            "https://placehold.co/128x128/F7FEE7/65A30D.png",
            vec![],
            vec![exam("ex7-1", "Plano Anual Completo", "LAZ001", "R$ 50,00 na primeira mensalidade", "Acesso a todas as aulas.", Status::Ativo, None)],
            now - Months::new(6),
        ),
        partner(
            "est-8",
            "CardioCor",
            Category::Saude,
            "Clínica",
            "55.666.777/0001-88",
            "(11) 92222-3333",
            "São Paulo",
            "Av. Dr. Arnaldo, 455, Cerqueira César, São Paulo - SP",
            Status::Ativo,
            "Cardiologia",
            "https://placehold.co/128x128/FFF1F2/E11D48.png",
            vec![link("aff-5", "prof-4", "R$ 350,00", "15% para retorno", "Atende convênios selecionados.")],
            vec![
                exam("ex8-1", "Eletrocardiograma (ECG)", "CARD001", "10%", "Resultado em 30 minutos.", Status::Ativo, Some("prof-4")),
                exam("ex8-2", "Teste Ergométrico", "CARD002", "5%", "Requer agendamento prévio e preparo.", Status::Ativo, Some("prof-4")),
            ],
            now - Duration::days(12),
        ),
        partner(
            "est-9",
            "Clínica Bem-Estar",
            Category::Saude,
            "Clínica",
            "66.777.888/0001-99",
            "(21) 94444-5555",
            "Rio de Janeiro",
            "Av. das Américas, 500, Barra da Tijuca, Rio de Janeiro - RJ",
            Status::Ativo,
            "Clínica Geral",
            "https://placehold.co/128x128/F0FDF4/22C55E.png",
            vec![link("aff-6", "prof-8", "R$ 180,00", "Pacote de check-up", "Atendimento geral e encaminhamentos.")],
            vec![exam("ex9-1", "Consulta de Rotina", "GER001", "20% para primeira consulta", "", Status::Ativo, Some("prof-8"))],
            now - Duration::days(32),
        ),
        partner(
            "est-10",
            "Hospital Infantil Pequeno Príncipe",
            Category::Saude,
            "Hospital",
            "77.888.999/0001-00",
            "(41) 96666-7777",
            "Curitiba",
            "Av. Iguaçu, 1500, Água Verde, Curitiba - PR",
            Status::Ativo,
            "Pediatria",
            "https://placehold.co/128x128/E0F2FE/0EA5E9.png",
            vec![link("aff-7", "prof-9", "R$ 250,00", "", "Atendimento de emergência e consultas.")],
            vec![
                exam("ex10-1", "Consulta Pediátrica de Rotina", "PED001", "10% irmãos", "Foco em acompanhamento do crescimento.", Status::Ativo, Some("prof-9")),
                exam("ex10-2", "Atendimento de Emergência Pediátrica", "PED002", "", "Disponível 24h.", Status::Ativo, Some("prof-9")),
            ],
            now - Duration::days(15),
        ),
    ]
}

fn mock_professionals(now: DateTime<Utc>) -> Vec<Professional> {
    let professional = |id: &str, name: &str, register: &str, specialty: &str, registered_at| Professional {
        id: id.to_string(),
        name: name.to_string(),
        register: register.to_string(),
        specialty: specialty.to_string(),
        registered_at,
    };

    vec![
        professional("prof-1", "Dr. João Silva", "CRO-SP 12345", "Odontologia", now - Duration::days(10)),
        professional("prof-2", "Dra. Maria Oliveira", "CREFITO 54321", "Fisioterapia", now - Duration::days(8)),
        professional("prof-3", "Dr. Carlos Pereira", "CRM-MG 98765", "Dermatologia", now - Months::new(4)),
        professional("prof-4", "Dra. Ana Costa", "CRM-SP 54321", "Cardiologia", now - Duration::days(2)),
        professional("prof-5", "Dra. Isabela Lima", "CRF-SP 67890", "Harmonização Facial", now - Duration::days(28)),
        professional("prof-6", "Prof. Ricardo Mendes", "Licenciatura 9876", "Cursos de Idiomas", now - Months::new(2)),
        professional("prof-7", "Lucas Ferreira", "CREF 1234-G/BA", "Fitness", now - Months::new(7)),
        professional("prof-8", "Dr. Lucas Martins", "CRM-RJ 11223", "Clínica Geral", now - Duration::days(40)),
        professional("prof-9", "Dra. Beatriz Lima", "CRM-PR 44556", "Pediatria", now - Duration::days(6)),
    ]
}

fn mock_activity_log(now: DateTime<Utc>) -> Vec<ActivityLogEntry> {
    let entry = |id: &str,
                 partner_id: Option<&str>,
                 professional_id: Option<&str>,
                 timestamp,
                 action: ActivityAction,
                 details: &str| ActivityLogEntry {
        id: id.to_string(),
        partner_id: partner_id.map(ToString::to_string),
        professional_id: professional_id.map(ToString::to_string),
        timestamp,
        user: ADMIN_USER.to_string(),
        action,
        details: details.to_string(),
    };

    vec![
        entry(
            "log-1",
            Some("est-1"),
            None,
            now - Duration::hours(2),
            ActivityAction::PartnerCreated,
            "Parceiro 'Clínica Sorriso Feliz' foi cadastrado no sistema.",
        ),
        entry(
            "log-2",
            Some("est-1"),
            None,
            now - Duration::hours(1),
            ActivityAction::ServiceCreated,
            "Serviço 'Limpeza Dental Completa' foi adicionado.",
        ),
        entry(
            "log-3",
            Some("est-2"),
            None,
            now - Duration::days(5),
            ActivityAction::PartnerDeactivated,
            "O parceiro foi marcado como inativo.",
        ),
        entry(
            "log-4",
            Some("est-5"),
            None,
            now - Duration::days(2),
            ActivityAction::PartnerCreated,
            "Parceiro 'Bella Pele Estética Avançada' foi cadastrado.",
        ),
        entry(
            "log-5",
            Some("est-1"),
            None,
            now - Duration::minutes(30),
            ActivityAction::ServiceUpdated,
            "Serviço 'Limpeza Dental Completa' foi atualizado.",
        ),
        entry(
            "log-6",
            None,
            Some("prof-2"),
            now - Duration::minutes(2),
            ActivityAction::ProfessionalCreated,
            "Profissional 'Dra. Maria Oliveira' foi cadastrado(a).",
        ),
        entry(
            "log-7",
            None,
            Some("prof-2"),
            now - Duration::minutes(1),
            ActivityAction::ProfessionalUpdated,
            "A especialidade de 'Dra. Maria Oliveira' foi atualizada.",
        ),
        entry(
            "log-8",
            Some("est-8"),
            None,
            now - Duration::hours(6),
            ActivityAction::PartnerCreated,
            "Parceiro 'CardioCor' foi cadastrado no sistema.",
        ),
        entry(
            "log-9",
            None,
            Some("prof-9"),
            now - Duration::hours(2),
            ActivityAction::ProfessionalCreated,
            "Profissional 'Dra. Beatriz Lima' foi cadastrado(a).",
        ),
        entry(
            "log-10",
            Some("est-1"),
            Some("prof-1"),
            now - Duration::minutes(4),
            ActivityAction::LinkCreated,
            "Dr. João Silva vinculado a Clínica Sorriso Feliz",
        ),
        entry(
            "log-11",
            Some("est-8"),
            Some("prof-4"),
            now - Duration::days(2),
            ActivityAction::LinkCreated,
            "Dra. Ana Costa vinculada a CardioCor",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn mock_ids_are_unique_per_collection() {
        let seed = SeedData::mock(now());
        let mut partner_ids: Vec<_> = seed.partners.iter().map(|p| p.id.clone()).collect();
        partner_ids.sort();
        partner_ids.dedup();
        assert_eq!(partner_ids.len(), seed.partners.len());

        let mut link_ids: Vec<_> = seed
            .partners
            .iter()
            .flat_map(|p| p.affiliated_professionals.iter().map(|l| l.id.clone()))
            .collect();
        link_ids.sort();
        link_ids.dedup();
        assert_eq!(link_ids.len(), 7);
    }

    #[test]
    fn every_seed_link_references_an_existing_professional() {
        let seed = SeedData::mock(now());
        for partner in &seed.partners {
            for link in &partner.affiliated_professionals {
                assert!(
                    seed.professionals.iter().any(|p| p.id == link.professional_id),
                    "dangling link {} on {}",
                    link.id,
                    partner.id
                );
            }
        }
    }

    #[test]
    fn registration_offsets_follow_reference_instant() {
        let seed = SeedData::mock(now());
        let sorriso = seed.partners.iter().find(|p| p.id == "est-1").unwrap();
        assert_eq!(sorriso.registered_at, now() - Duration::days(5));
    }
}
