//! Hardcoded content shown before the first remote read resolves, and substituted
//! for it when a domain degrades to fallback.

use crate::domain::model::{BlogPost, Project, SkillCategory, PRESENT};

pub fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory::new("Backend", &["Java", "Spring Boot", "REST API", "JPA / Hibernate"]),
        SkillCategory::new("Database", &["PostgreSQL", "MySQL"]),
        SkillCategory::new("DevOps", &["Docker", "Linux", "Nginx"]),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "ecommerce-rest-api".to_string(),
            title: "E-commerce REST API".to_string(),
            description: "A fully-featured REST API for an e-commerce platform with product management, cart operations, and order processing.".to_string(),
            full_description: Some("A RESTful API for a modern e-commerce platform covering product catalog management, shopping cart operations, order processing and payment integration. Built with Spring Boot, with a Redis caching layer in front of PostgreSQL, and support for real-time inventory, order tracking and reporting.".to_string()),
            stack: "Java, Spring Boot, PostgreSQL, Redis, Docker".to_string(),
            from: "2024-10".to_string(),
            to: PRESENT.to_string(),
            github_url: Some("https://github.com".to_string()),
            demo_url: Some("https://demo.example.com".to_string()),
            customer: Some("TechCorp Solutions".to_string()),
            team_size: Some(5),
        },
        Project {
            id: "jwt-authentication-system".to_string(),
            title: "JWT Authentication System".to_string(),
            description: "Secure authentication & authorization microservice with JWT tokens, refresh flows, and role-based access control.".to_string(),
            full_description: Some("An authentication and authorization microservice for enterprise applications: JWT access tokens with refresh and revocation, role-based access control, OAuth2 integration, BCrypt password hashing and audit logging, built on Spring Security.".to_string()),
            stack: "Java, Spring Security, JWT, MySQL, Redis".to_string(),
            from: "2024-07".to_string(),
            to: "2024-09".to_string(),
            github_url: Some("https://github.com".to_string()),
            demo_url: Some("https://demo.example.com".to_string()),
            customer: Some("FinanceHub Inc".to_string()),
            team_size: Some(3),
        },
        Project {
            id: "dockerized-microservice".to_string(),
            title: "Dockerized Microservice".to_string(),
            description: "A containerized microservice architecture with service discovery, API gateway, and centralized logging.".to_string(),
            full_description: Some("A microservices platform built with Docker and Spring Cloud: Eureka service discovery, Spring Cloud Gateway routing, centralized configuration, distributed tracing, circuit breakers, health checks and centralized logging on the ELK stack.".to_string()),
            stack: "Docker, Spring Cloud, Nginx, PostgreSQL, Kubernetes".to_string(),
            from: "2024-04".to_string(),
            to: "2024-06".to_string(),
            github_url: Some("https://github.com".to_string()),
            demo_url: Some("https://demo.example.com".to_string()),
            customer: Some("CloudTech Systems".to_string()),
            team_size: Some(8),
        },
        Project {
            id: "memory-leak-investigation".to_string(),
            title: "Memory Leak Investigation".to_string(),
            description: "An educational demo showcasing common Java memory leak patterns, profiling techniques, and resolution strategies.".to_string(),
            full_description: Some("A set of reproducible Java memory leak scenarios with their fixes, covering OutOfMemoryErrors, heap dump analysis, thread dumps and GC behavior, profiled with VisualVM and JProfiler and monitored through Grafana.".to_string()),
            stack: "Java, JVM, VisualVM, JProfiler, Grafana".to_string(),
            from: "2024-01".to_string(),
            to: "2024-03".to_string(),
            github_url: Some("https://github.com".to_string()),
            demo_url: None,
            customer: Some("Internal R&D".to_string()),
            team_size: Some(2),
        },
    ]
}

fn post(id: i64, title: &str, description: &str, content: &str, created_at: &str, image: &str) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        description: description.to_string(),
        content: content.trim().to_string(),
        created_at: created_at.to_string(),
        image: image.to_string(),
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "Understanding JVM Garbage Collection",
            "A deep dive into how the JVM manages memory, different GC algorithms, and tuning strategies for production systems.",
            r#"
# Understanding JVM Garbage Collection

Garbage Collection reclaims memory held by objects that are no longer reachable, so Java developers never free memory by hand.

## Common GC Algorithms

- **Serial GC**: a single collector thread, suited to small heaps.
- **Parallel GC**: multi-threaded young generation collection, tuned for throughput.
- **G1 GC**: region-based, collects the regions with the most garbage first.
- **ZGC**: concurrent and low-latency, with pauses of a few milliseconds.

## Best Practices

1. Enable and monitor GC logs in production.
2. Pick the collector that matches your latency and throughput goals.
3. Size the heap explicitly.
4. Watch for objects retained by accident.
"#,
            "2025-01-15",
            "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=800&h=400&fit=crop",
        ),
        post(
            2,
            "Building REST APIs with Spring Boot 3",
            "Best practices for structuring, documenting, and securing production-grade REST APIs using modern Spring Boot.",
            r#"
# Building REST APIs with Spring Boot 3

Start from Spring Initializr with Spring Web, Spring Data JPA, Spring Security, Validation and SpringDoc OpenAPI.

## Structure

Keep configuration, controllers, services, repositories, models, DTOs and exception handling in separate packages.

## Controllers

Use the HTTP method that matches the operation, return meaningful status codes and validate every request body.

## Security

Authenticate with JWT, configure CORS deliberately, rate limit public endpoints and sanitize input.
"#,
            "2024-12-10",
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=400&fit=crop",
        ),
        post(
            3,
            "Docker for Java Developers",
            "From Dockerfile basics to multi-stage builds — everything you need to containerize your Java applications.",
            r#"
# Docker for Java Developers

Containers give the same environment in development, test and production.

## Multi-Stage Builds

Build the jar in a Maven image and copy only the artifact into a slim JRE image to keep the runtime image small.

## Best Practices

1. Start from official base images.
2. Combine RUN steps and use a .dockerignore.
3. Run as a non-root user.
4. Add health checks and configure through environment variables.
"#,
            "2024-11-20",
            "https://images.unsplash.com/photo-1605745341075-9e29ad8e36b2?w=800&h=400&fit=crop",
        ),
        post(
            4,
            "Microservices Design Patterns",
            "Explore essential design patterns for building resilient and scalable microservices architectures.",
            r#"
# Microservices Design Patterns

## Core Patterns

An API gateway gives clients a single entry point, service discovery lets services find each other, and circuit breakers stop failures from cascading.

## Data Patterns

Give each service its own database, coordinate distributed transactions with sagas and separate reads from writes with CQRS.

## Resilience

Retry with exponential backoff, set timeouts on every call and isolate resources with bulkheads.
"#,
            "2024-10-05",
            "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&h=400&fit=crop",
        ),
        post(
            5,
            "Getting Started with Kubernetes",
            "A practical introduction to Kubernetes for Java developers, from basic concepts to deploying your first application.",
            r#"
# Getting Started with Kubernetes

## Core Concepts

Pods run containers, Deployments keep the desired number of pods running, Services give them a stable address and ConfigMaps and Secrets carry configuration.

## Deploying a Java Application

Package the application as an image, describe it in a Deployment with resource requests and probes, then expose it through a Service.
"#,
            "2024-09-12",
            "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=800&h=400&fit=crop",
        ),
        post(
            6,
            "Java Concurrency and Multithreading",
            "Master concurrent programming in Java with practical examples and common pitfalls to avoid.",
            r#"
# Java Concurrency and Multithreading

## Common Pitfalls

Race conditions, deadlocks, starvation and memory visibility bugs are the usual suspects.

## Best Practices

1. Prefer ExecutorService over raw threads.
2. Use concurrent collections.
3. Keep synchronized blocks small.
4. Prefer immutable objects and CompletableFuture.
5. Try virtual threads on Java 21+.
"#,
            "2024-08-18",
            "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=800&h=400&fit=crop",
        ),
    ]
}
