//! Bundled stand-in profile used when no network call is wanted.

use crate::{
    Coordinates, DatedAge, GovernmentId, Location, Login, Name, Picture, Postcode, Street, Timezone, UserProfile,
};

/// The fixed demo profile returned by the fixture profile source.
#[must_use]
pub fn demo_profile() -> UserProfile {
    UserProfile {
        gender: "male".into(),
        name: Name { title: "Mr".into(), first: "Brayden".into(), last: "Johnston".into() },
        location: Location {
            street: Street { number: 4800, name: "Frances Ct".into() },
            city: "Baton Rouge".into(),
            state: "South Dakota".into(),
            country: "United States".into(),
            postcode: Postcode::Number(67650),
            coordinates: Coordinates { latitude: "65.5186".into(), longitude: "-53.8524".into() },
            timezone: Timezone { offset: "+5:45".into(), description: "Kathmandu".into() },
        },
        email: "brayden.johnston@example.com".into(),
        login: Login {
            uuid: "17c741ca-0e65-41b3-8489-1c6d631d6d7d".into(),
            username: "orangemeercat177".into(),
            password: "ddddddd".into(),
            salt: "d3AwgSnV".into(),
            md5: "147680f21168954658a690efaaeba556".into(),
            sha1: "49aece9276e5ab42751a10d87ea86cb30d6f6b31".into(),
            sha256: "3589f9937e960e0b071c0a46ab79361ed6b9314bcd863fbabf239a5ef831aa16".into(),
        },
        dob: DatedAge { date: "1989-10-13T20:27:15.908Z".into(), age: 35 },
        registered: DatedAge { date: "2010-06-29T09:54:45.987Z".into(), age: 15 },
        phone: "(521) 838-4838".into(),
        cell: "(647) 806-0397".into(),
        id: GovernmentId { name: "SSN".into(), value: Some("070-85-5922".into()) },
        picture: Picture {
            large: "https://randomuser.me/api/portraits/men/81.jpg".into(),
            medium: "https://randomuser.me/api/portraits/med/men/81.jpg".into(),
            thumbnail: "https://randomuser.me/api/portraits/thumb/men/81.jpg".into(),
        },
        nat: "US".into(),
    }
}
