//! Static site content and the filters over it.

use chrono::NaiveDate;

/// Filter value that matches everything
pub const FILTER_ALL: &str = "all";

// ============================================================================
// Profile
// ============================================================================

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub subtitle: &'static str,
    pub about: &'static [&'static str],
    pub years_experience: u32,
    pub stats: &'static [(&'static str, &'static str)],
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub socials: &'static [SocialLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Maulana Arianto",
    tagline: "Frontend Developer · React 19 · TypeScript",
    subtitle: "Hello what's up :3",
    about: &[
        "I am a **Software Engineering Technology** student at **Batam State Polytechnic** who enjoys turning ideas into functional and well-designed web applications.",
        "My main focus is **full-stack development**, where I work with both **frontend and backend technologies** to build clean, responsive, and scalable solutions.",
        "I'm highly motivated to keep learning, explore new tools, and grow through hands-on projects and collaboration with others.",
    ],
    years_experience: 4,
    stats: &[
        ("12+", "Projects Completed"),
        ("100%", "Commitment to Learning"),
    ],
    email: "maulanaarianto321@gmail.com",
    phone: "+62 812-3456-7890",
    location: "Batam City, Riau Island Province, Indonesia",
    socials: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://linkedin.com",
        },
        SocialLink {
            label: "Twitter",
            url: "https://twitter.com",
        },
    ],
};

// ============================================================================
// Skills
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0..=100
    pub level: u8,
    pub color: &'static str,
}

impl Skill {
    /// Bar fill as a fraction for `transform: scaleX(..)`
    pub fn fraction(&self) -> f64 {
        f64::from(self.level.min(100)) / 100.0
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "PHP Native", level: 90, color: "#6C63FF" },
    Skill { name: "Laravel", level: 85, color: "#FF6B6B" },
    Skill { name: "CodeIgniter", level: 85, color: "#F4A261" },
    Skill { name: "Flutter", level: 75, color: "#4D96FF" },
    Skill { name: "IoT", level: 70, color: "#43AA8B" },
    Skill { name: "React", level: 75, color: "#61C0BF" },
    Skill { name: "MySQL", level: 85, color: "#577590" },
];

// ============================================================================
// Experience & certificates
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineKind {
    Experience,
    Certificate,
}

impl TimelineKind {
    pub fn badge(&self) -> &'static str {
        match self {
            TimelineKind::Experience => "Experience",
            TimelineKind::Certificate => "Certificate",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TimelineKind::Experience => "experience",
            TimelineKind::Certificate => "certificate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organisation: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub kind: TimelineKind,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Frontend Developer Intern",
        organisation: "PT Teknologi Nusantara",
        date: "Jan 2024 - Jun 2024",
        description: "Developed UI using React and Tailwind, integrated REST APIs, and improved application performance.",
        kind: TimelineKind::Experience,
    },
    TimelineEntry {
        title: "React Developer Certificate",
        organisation: "Dicoding Indonesia",
        date: "2023",
        description: "Official React Developer certification covering components, hooks, and state management.",
        kind: TimelineKind::Certificate,
    },
    TimelineEntry {
        title: "Fullstack Web Development",
        organisation: "Binar Academy",
        date: "2022",
        description: "Intensive fullstack training using Laravel, MySQL, and React.",
        kind: TimelineKind::Certificate,
    },
];

// ============================================================================
// Projects
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub github: &'static str,
    pub demo: Option<&'static str>,
}

impl Project {
    /// `all`, or any tag containing `filter` case-insensitively
    pub fn matches(&self, filter: &str) -> bool {
        if filter.eq_ignore_ascii_case(FILTER_ALL) {
            return true;
        }
        let needle = filter.to_lowercase();
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

pub const PROJECT_FILTERS: &[&str] = &["all", "PHP", "laravel", "react", "iot", "codeigniter"];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Inventory Borrowing Website (PHP Native)",
        description: "A web-based inventory borrowing management system built using native PHP and MySQL. Features include item management, borrowing and returning records, admin dashboard, and user authentication.",
        tags: &["PHP", "MySQL"],
        image: "https://picsum.photos/seed/borrow/600/400.jpg",
        github: "https://github.com/mlnaarianto/inventaris-barang",
        demo: None,
    },
    Project {
        title: "Room Practice Website",
        description: "A room practice management website built with Laravel. Features include room scheduling, booking system, admin dashboard, and user authentication.",
        tags: &["PHP", "Laravel", "MySQL"],
        image: "https://picsum.photos/seed/room/600/400.jpg",
        github: "https://github.com/mlnaarianto/Room-Practice",
        demo: None,
    },
    Project {
        title: "IoT Printer Server with RFID",
        description: "An IoT-based printer server deployment system built on ARM architecture with RFID card authentication. This project enables centralized printer management, secure access control, and real-time monitoring.",
        tags: &["IoT", "Laravel", "MySQL"],
        image: "https://picsum.photos/seed/iot/600/400.jpg",
        github: "https://github.com/mlnaarianto/Printer-server-with-RFID-Card-IoT",
        demo: None,
    },
    Project {
        title: "Online Store Application (CodeIgniter 4)",
        description: "An online store web application built using PHP and the CodeIgniter 4 framework. Features include product management, shopping cart, user authentication, and order processing.",
        tags: &["PHP", "CodeIgniter", "MySQL"],
        image: "https://picsum.photos/seed/company/600/400.jpg",
        github: "https://github.com/mlnaarianto/Aplication-Store-with-code-igniter-4",
        demo: None,
    },
    Project {
        title: "Personal Portfolio Website",
        description: "A modern and responsive personal portfolio website with smooth animations, a light and dark theme, and a clean UI design.",
        tags: &["React", "TypeScript", "Vite", "Framer Motion"],
        image: "https://picsum.photos/seed/portfolio/600/400.jpg",
        github: "https://github.com/mlnaarianto/React.js-portofolio",
        demo: None,
    },
    Project {
        title: "SITS Polibatam",
        description: "A training and certification management web application for Polibatam built using Laravel. The system integrates REST API services for data communication, enabling efficient participant management, scheduling, and certification tracking.",
        tags: &["PHP", "Laravel", "MySQL", "REST API"],
        image: "https://picsum.photos/seed/picsum/600/400.jpg",
        github: "https://github.com/mlnaarianto/pelatihan",
        demo: None,
    },
];

pub fn filter_projects(filter: &str) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.matches(filter)).collect()
}

// ============================================================================
// Blog
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    /// Markdown source of the article
    pub body: &'static str,
    /// ISO `YYYY-MM-DD`
    pub date: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub read_time: &'static str,
}

impl BlogPost {
    /// Long-form date such as `February 10, 2026`; the raw string if unparseable
    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Getting Started with Native PHP for Beginners",
        slug: "getting-started-native-php",
        excerpt: "My first experience learning native PHP, understanding basic syntax, CRUD operations, and how PHP connects with MySQL in simple web applications.",
        body: r#"
PHP was the first server-side language I learned, and writing it **without a framework** taught me how a request really travels through a web application.

## Basic syntax

Every PHP file starts with an opening tag. Variables begin with `$` and are dynamically typed:

```php
<?php
$name = "World";
echo "Hello, $name!";
```

## CRUD with MySQL

Using `mysqli` or PDO you can connect to MySQL and run queries. Prepared statements keep user input away from the SQL text:

```php
$stmt = $pdo->prepare("SELECT * FROM items WHERE id = ?");
$stmt->execute([$id]);
```

## What I learned

- How forms submit data with `GET` and `POST`
- Why sessions are needed for logins
- How to structure files before reaching for a framework
"#,
        date: "2026-02-10",
        category: "Backend",
        image: "https://picsum.photos/seed/php/600/400.jpg",
        read_time: "4 min read",
    },
    BlogPost {
        id: 2,
        title: "Understanding RESTful API in Web Development",
        slug: "understanding-restful-api",
        excerpt: "An introduction to RESTful API concepts, HTTP methods, and how frontend and backend communicate using JSON data.",
        body: r#"
A REST API exposes **resources** through URLs and lets clients act on them with standard HTTP methods.

## HTTP methods

| Method | Meaning |
|--------|---------|
| GET    | Read a resource |
| POST   | Create a resource |
| PUT    | Replace a resource |
| DELETE | Remove a resource |

## JSON everywhere

Frontend and backend agree on JSON bodies:

```json
{ "id": 7, "title": "Write the docs", "done": false }
```

## Status codes matter

Return `201` after creating, `404` for missing resources and `422` for validation errors; clients rely on them.
"#,
        date: "2026-02-10",
        category: "Backend",
        image: "https://picsum.photos/seed/restapi/600/400.jpg",
        read_time: "6 min read",
    },
    BlogPost {
        id: 3,
        title: "Building Dynamic Websites with Laravel Blade",
        slug: "building-dynamic-websites-laravel-blade",
        excerpt: "Learn how Laravel Blade templating engine helps build clean, reusable, and dynamic web interfaces efficiently.",
        body: r#"
Blade is Laravel's templating engine. It compiles to plain PHP and caches the result, so it adds almost no overhead.

## Layouts and sections

A base layout declares `@yield('content')`; pages `@extends` it and fill the section.

## Components

Reusable pieces live in `resources/views/components` and are used like HTML tags:

```blade
<x-alert type="success" :message="$message" />
```

## Control structures

`@if`, `@foreach` and `@forelse` keep templates readable without raw PHP tags.
"#,
        date: "2026-02-10",
        category: "Laravel",
        image: "https://picsum.photos/seed/laravelblade/600/400.jpg",
        read_time: "8 min read",
    },
    BlogPost {
        id: 4,
        title: "Implementing OAuth Social Login (Google, Meta, X, Discord)",
        slug: "implementing-oauth-social-login",
        excerpt: "Learn how OAuth works and how to integrate social login services like Google, Meta, X, and Discord into your web application.",
        body: r#"
OAuth 2.0 lets users sign in with an account they already have, without giving your site their password.

## The authorization code flow

1. Redirect the user to the provider with your client id and a `state` value
2. The provider redirects back with a short-lived **code**
3. Your server exchanges the code for an access token
4. Use the token to fetch the user's profile

## Provider notes

- **Google** and **Discord** return an email address by default
- **Meta** requires app review for most scopes
- **X** uses OAuth 2.0 with PKCE for new apps

Always verify the `state` parameter to prevent CSRF.
"#,
        date: "2026-02-10",
        category: "Authentication",
        image: "https://picsum.photos/seed/oauth/600/400.jpg",
        read_time: "9 min read",
    },
    BlogPost {
        id: 5,
        title: "Generating Anime Characters using DCGAN with TensorFlow & Keras",
        slug: "anime-generator-dcgan-tensorflow-keras",
        excerpt: "Learn how I built an anime face generator using Deep Convolutional GAN (DCGAN) with TensorFlow and Keras, from dataset preparation to model training.",
        body: r#"
A **DCGAN** pits two convolutional networks against each other: a generator that produces images from noise and a discriminator that tries to tell them from real ones.

## Dataset preparation

Faces were cropped to 64×64 and normalised to `[-1, 1]` to match the generator's `tanh` output.

## Architecture

- Generator: dense layer, then `Conv2DTranspose` blocks with batch normalisation
- Discriminator: strided `Conv2D` blocks with LeakyReLU and dropout

## Training tips

Use a small learning rate (`2e-4`) with Adam and `beta_1 = 0.5`, and watch for mode collapse when every sample starts to look alike.
"#,
        date: "2026-02-10",
        category: "AI / Machine Learning",
        image: "https://picsum.photos/seed/animegan/600/400.jpg",
        read_time: "12 min read",
    },
    BlogPost {
        id: 6,
        title: "Getting Started with CodeIgniter 4 for Web Development",
        slug: "getting-started-codeigniter-4",
        excerpt: "A beginner-friendly introduction to CodeIgniter 4, covering MVC structure, routing, controllers, and simple CRUD implementation.",
        body: r#"
CodeIgniter 4 is a light PHP framework with a small footprint and very little configuration.

## MVC structure

- `app/Controllers` handle requests
- `app/Models` talk to the database
- `app/Views` render HTML

## Routing

Routes are declared in `app/Config/Routes.php`:

```php
$routes->get('products', 'Products::index');
$routes->post('products', 'Products::create');
```

## Simple CRUD

Extending `CodeIgniter\Model` gives `find`, `insert`, `update` and `delete` for free once `$table` and `$allowedFields` are set.
"#,
        date: "2026-02-10",
        category: "PHP",
        image: "https://picsum.photos/seed/codeigniter4/600/400.jpg",
        read_time: "8 min read",
    },
];

/// Look up a post by slug
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

/// `all` followed by each distinct category in first-appearance order
pub fn blog_categories() -> Vec<&'static str> {
    let mut categories = vec![FILTER_ALL];
    for post in BLOG_POSTS {
        if !categories.contains(&post.category) {
            categories.push(post.category);
        }
    }
    categories
}

pub fn filter_posts(category: &str) -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|post| category == FILTER_ALL || post.category == category)
        .collect()
}

/// Filter button label: first character upper-cased
pub fn filter_label(filter: &str) -> String {
    let mut chars = filter.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
