use super::ymd;
use crate::models::{
    owner::Owner,
    pet::{Pet, PetStatus, Species},
    vaccination::Vaccination,
};

pub fn pets() -> Vec<Pet> {
    vec![
        Pet {
            id: 1,
            name: "Max".into(),
            species: Species::Perro,
            breed: "Golden Retriever".into(),
            age: "3 años".into(),
            weight: "28.5 kg".into(),
            owner: "María García Rodríguez".into(),
            owner_id: 1,
            phone: "+57 300-234-5678".into(),
            status: PetStatus::Saludable,
            microchip: "MCH001234567".into(),
            last_visit: ymd(2024, 6, 28),
            next_vaccine: ymd(2024, 8, 15),
            photo: None,
        },
        Pet {
            id: 2,
            name: "Luna".into(),
            species: Species::Gato,
            breed: "Persa".into(),
            age: "2 años 4 meses".into(),
            weight: "4.2 kg".into(),
            owner: "Carlos López Mendoza".into(),
            owner_id: 2,
            phone: "+57 301-345-6789".into(),
            status: PetStatus::Tratamiento,
            microchip: "MCH001234568".into(),
            last_visit: ymd(2024, 6, 25),
            next_vaccine: ymd(2024, 7, 20),
            photo: None,
        },
        Pet {
            id: 3,
            name: "Buddy".into(),
            species: Species::Perro,
            breed: "Labrador Chocolate".into(),
            age: "5 años 2 meses".into(),
            weight: "32.1 kg".into(),
            owner: "Ana Martínez Silva".into(),
            owner_id: 3,
            phone: "+57 302-456-7890".into(),
            status: PetStatus::Saludable,
            microchip: "MCH001234569".into(),
            last_visit: ymd(2024, 7, 2),
            next_vaccine: ymd(2024, 9, 10),
            photo: None,
        },
        Pet {
            id: 4,
            name: "Mimi".into(),
            species: Species::Gato,
            breed: "Siamés".into(),
            age: "4 años 8 meses".into(),
            weight: "3.8 kg".into(),
            owner: "Pedro Ruiz Castro".into(),
            owner_id: 4,
            phone: "+57 303-567-8901".into(),
            status: PetStatus::CitaPendiente,
            microchip: "MCH001234570".into(),
            last_visit: ymd(2024, 6, 30),
            next_vaccine: ymd(2024, 7, 15),
            photo: None,
        },
        Pet {
            id: 5,
            name: "Rocky".into(),
            species: Species::Perro,
            breed: "Pastor Alemán".into(),
            age: "6 años".into(),
            weight: "35.7 kg".into(),
            owner: "Laura Fernández Vega".into(),
            owner_id: 5,
            phone: "+57 304-678-9012".into(),
            status: PetStatus::Saludable,
            microchip: "MCH001234571".into(),
            last_visit: ymd(2024, 7, 1),
            next_vaccine: ymd(2024, 8, 1),
            photo: None,
        },
        Pet {
            id: 6,
            name: "Whiskers".into(),
            species: Species::Gato,
            breed: "Maine Coon".into(),
            age: "1 año 6 meses".into(),
            weight: "5.1 kg".into(),
            owner: "Miguel Santos Herrera".into(),
            owner_id: 6,
            phone: "+57 305-789-0123".into(),
            status: PetStatus::Tratamiento,
            microchip: "MCH001234572".into(),
            last_visit: ymd(2024, 6, 22),
            next_vaccine: ymd(2024, 7, 25),
            photo: None,
        },
        Pet {
            id: 7,
            name: "Bella".into(),
            species: Species::Perro,
            breed: "Bulldog Francés".into(),
            age: "2 años 8 meses".into(),
            weight: "12.3 kg".into(),
            owner: "Carmen Jiménez Morales".into(),
            owner_id: 7,
            phone: "+57 306-890-1234".into(),
            status: PetStatus::CitaPendiente,
            microchip: "MCH001234573".into(),
            last_visit: ymd(2024, 7, 3),
            next_vaccine: ymd(2024, 7, 18),
            photo: None,
        },
        Pet {
            id: 8,
            name: "Felix".into(),
            species: Species::Gato,
            breed: "Bengalí".into(),
            age: "3 años 3 meses".into(),
            weight: "4.7 kg".into(),
            owner: "Roberto Díaz Peña".into(),
            owner_id: 8,
            phone: "+57 307-901-2345".into(),
            status: PetStatus::Saludable,
            microchip: "MCH001234574".into(),
            last_visit: ymd(2024, 6, 27),
            next_vaccine: ymd(2024, 8, 5),
            photo: None,
        },
        Pet {
            id: 9,
            name: "Coco".into(),
            species: Species::Otro,
            breed: "Conejo Holland Lop".into(),
            age: "1 año".into(),
            weight: "1.8 kg".into(),
            owner: "María García Rodríguez".into(),
            owner_id: 1,
            phone: "+57 300-234-5678".into(),
            status: PetStatus::Saludable,
            microchip: "MCH001234575".into(),
            last_visit: ymd(2024, 6, 15),
            next_vaccine: ymd(2024, 12, 15),
            photo: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn owner(
    id: i64,
    name: &str,
    national_id: &str,
    phone: &str,
    email: &str,
    address: &str,
    occupation: &str,
    last_visit: (i32, u32, u32),
) -> Owner {
    Owner {
        id,
        name: name.into(),
        national_id: national_id.into(),
        phone: phone.into(),
        email: email.into(),
        address: address.into(),
        occupation: occupation.into(),
        last_visit: ymd(last_visit.0, last_visit.1, last_visit.2),
    }
}

pub fn owners() -> Vec<Owner> {
    vec![
        owner(
            1,
            "María García Rodríguez",
            "1712345678",
            "+57 300-234-5678",
            "maria.garcia@email.com",
            "Av. Principal 123, Ciudad",
            "Ingeniera",
            (2024, 6, 28),
        ),
        owner(
            2,
            "Carlos López Mendoza",
            "0923456789",
            "+57 301-345-6789",
            "carlos.lopez@email.com",
            "Calle Secundaria 456, Ciudad",
            "Docente",
            (2024, 6, 25),
        ),
        owner(
            3,
            "Ana Martínez Silva",
            "1734567890",
            "+57 302-456-7890",
            "ana.martinez@email.com",
            "Plaza Central 789, Ciudad",
            "Arquitecta",
            (2024, 7, 2),
        ),
        owner(
            4,
            "Pedro Ruiz Castro",
            "0145678901",
            "+57 303-567-8901",
            "pedro.ruiz@email.com",
            "Av. Norte 321, Ciudad",
            "Comerciante",
            (2024, 6, 30),
        ),
        owner(
            5,
            "Laura Fernández Vega",
            "1756789012",
            "+57 304-678-9012",
            "laura.fernandez@email.com",
            "Calle Las Flores 55, Ciudad",
            "Médica",
            (2024, 7, 1),
        ),
        owner(
            6,
            "Miguel Santos Herrera",
            "0967890123",
            "+57 305-789-0123",
            "miguel.santos@email.com",
            "Av. del Río 910, Ciudad",
            "Contador",
            (2024, 6, 22),
        ),
        owner(
            7,
            "Carmen Jiménez Morales",
            "1778901234",
            "+57 306-890-1234",
            "carmen.jimenez@email.com",
            "Calle Olmedo 77, Ciudad",
            "Abogada",
            (2024, 7, 3),
        ),
        owner(
            8,
            "Roberto Díaz Peña",
            "0189012345",
            "+57 307-901-2345",
            "roberto.diaz@email.com",
            "Av. Amazonas 1500, Ciudad",
            "Chef",
            (2024, 6, 27),
        ),
    ]
}

pub fn vaccinations() -> Vec<Vaccination> {
    vec![
        Vaccination {
            id: 1,
            pet_name: "Max".into(),
            owner_name: "María García Rodríguez".into(),
            vaccine: "Vacuna Antirrábica".into(),
            species: Species::Perro,
            applied_date: ymd(2024, 6, 15),
            next_due: ymd(2025, 6, 15),
            lot: "RAB-2024-001".into(),
            veterinarian: "Dr. Rodríguez".into(),
            blockchain_hash: "0xa1b2c3d4e5f6789012345678901234567890abcdef1234567890abcdef123456"
                .into(),
        },
        Vaccination {
            id: 2,
            pet_name: "Luna".into(),
            owner_name: "Carlos López Mendoza".into(),
            vaccine: "Refuerzo Múltiple".into(),
            species: Species::Gato,
            applied_date: ymd(2024, 7, 1),
            next_due: ymd(2024, 12, 30),
            lot: "MUL-2024-008".into(),
            veterinarian: "Dra. Martínez".into(),
            blockchain_hash: "0xb2c3d4e5f6789012345678901234567890abcdef1234567890abcdef12345678"
                .into(),
        },
        Vaccination {
            id: 3,
            pet_name: "Buddy".into(),
            owner_name: "Ana Martínez Silva".into(),
            vaccine: "Desparasitación".into(),
            species: Species::Perro,
            applied_date: ymd(2024, 6, 20),
            next_due: ymd(2024, 7, 10),
            lot: "DES-2024-003".into(),
            veterinarian: "Dr. García".into(),
            blockchain_hash: "0xc3d4e5f6789012345678901234567890abcdef1234567890abcdef1234567890"
                .into(),
        },
        Vaccination {
            id: 4,
            pet_name: "Mimi".into(),
            owner_name: "Pedro Ruiz Castro".into(),
            vaccine: "Triple Felina".into(),
            species: Species::Gato,
            applied_date: ymd(2023, 7, 5),
            next_due: ymd(2024, 7, 5),
            lot: "TRF-2023-021".into(),
            veterinarian: "Dra. López".into(),
            blockchain_hash: "0xd4e5f6789012345678901234567890abcdef1234567890abcdef1234567890ab"
                .into(),
        },
        Vaccination {
            id: 5,
            pet_name: "Rocky".into(),
            owner_name: "Laura Fernández Vega".into(),
            vaccine: "Séxtuple Canina".into(),
            species: Species::Perro,
            applied_date: ymd(2024, 7, 1),
            next_due: ymd(2025, 7, 1),
            lot: "SEX-2024-014".into(),
            veterinarian: "Dr. Fernández".into(),
            blockchain_hash: "0xe5f6789012345678901234567890abcdef1234567890abcdef1234567890abcd"
                .into(),
        },
    ]
}
