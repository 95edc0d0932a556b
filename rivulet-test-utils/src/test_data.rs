// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixtures shared by the operator tests.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Animal {
    pub species: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person(p) => write!(f, "Person[name={}, age={}]", p.name, p.age),
            TestData::Animal(a) => write!(f, "Animal[species={}, legs={}]", a.species, a.legs),
        }
    }
}

pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(Person {
        name: name.to_string(),
        age,
    })
}

pub fn animal(species: &str, legs: u32) -> TestData {
    TestData::Animal(Animal {
        species: species.to_string(),
        legs,
    })
}

pub fn person_alice() -> TestData {
    person("Alice", 25)
}

pub fn person_bob() -> TestData {
    person("Bob", 30)
}

pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}
