//! Keeps a set of pets ordered by birth date, then queries and prunes by date range.
use chrono::NaiveDate;
use sorted_keyed_array::SortedArray;

#[derive(Clone, Debug, PartialEq)]
struct Pet {
    name: &'static str,
    date_of_birth: NaiveDate,
    number_legs: u32,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn main() {
    let pets = vec![
        Pet {
            name: "Heidi",
            date_of_birth: date(2007, 11, 1),
            number_legs: 4,
        },
        Pet {
            name: "Artemis",
            date_of_birth: date(2014, 4, 1),
            number_legs: 4,
        },
        Pet {
            name: "Some-Snake",
            date_of_birth: date(2015, 4, 5),
            number_legs: 0,
        },
        Pet {
            name: "Sully",
            date_of_birth: date(2005, 2, 1),
            number_legs: 3,
        },
    ];

    let mut by_birth = SortedArray::from_slice(|p: &Pet| p.date_of_birth, &pets);
    by_birth.insert(Pet {
        name: "Biscuit",
        date_of_birth: date(2010, 6, 15),
        number_legs: 4,
    });

    for pet in &by_birth {
        println!("{} {}", pet.date_of_birth, pet.name);
    }

    let born_2006_2014 = by_birth.range_slice_inclusive(&date(2006, 1, 1), &date(2014, 12, 31));
    dbg!(born_2006_2014.iter().map(|p| p.name).collect::<Vec<_>>());

    let (start, end) = by_birth.range_inclusive(&date(2000, 1, 1), &date(2009, 12, 31));
    let removed = by_birth.remove_range(start, end);
    assert_eq!(removed.len(), 2);
    assert!(!by_birth.contains(&pets[0]));
    assert!(by_birth.contains(&pets[1]));

    // legs as the key, several pets share 4
    let by_legs = SortedArray::from_slice(|p: &Pet| p.number_legs, &pets);
    assert!(by_legs.contains(&pets[1]));
    dbg!(by_legs.range_inclusive(&4, &4));
}
