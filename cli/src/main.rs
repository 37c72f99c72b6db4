use clap::{Parser, Subcommand};
use madrasa::model::entity::{
    AdminAccount, AdminAccountCreate, AudioPart, AudioPartCreate, Category, CategoryCreate,
    Lecturer, LecturerCreate, Lesson, LessonCreate, Quiz, QuizCreate, QuizQuestion,
    QuizQuestionCreate,
};
use madrasa::model::{CrudRepository, DbConnection, ModelManager};
use madrasa::web::AuthenticatedAdmin;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the madrasa DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage back-office accounts
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Manage lecturers
    Lecturer {
        #[command(subcommand)]
        action: LecturerCommands,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Manage audio parts
    Part {
        #[command(subcommand)]
        action: PartCommands,
    },

    /// Manage quizzes
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
}

/// Back-office account management
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "editor")]
        role: String,
    },
}

/// Lecturer management
#[derive(Subcommand, Debug)]
pub enum LecturerCommands {
    Add {
        #[arg(long)]
        full_name: String,
        #[arg(long, default_value = "")]
        bio: String,
        /// Telegram file id of the lecturer photo
        #[arg(long)]
        photo_file_id: Option<String>,
    },
}

/// Category management
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        #[arg(long)]
        category_id: Uuid,
        #[arg(long)]
        lecturer_id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
        #[arg(long, default_value_t = false)]
        published: bool,
    },
}

/// Audio part management
#[derive(Subcommand, Debug)]
pub enum PartCommands {
    Add {
        #[arg(long)]
        lesson_id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
        #[arg(long, default_value_t = 0)]
        duration_secs: i32,
        /// Telegram file id, get one by forwarding the audio to the bot
        #[arg(long)]
        file_id: Option<String>,
        #[arg(long, default_value_t = false)]
        published: bool,
    },
}

/// Quiz management
#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    Add {
        #[arg(long)]
        audio_part_id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    AddQuestion {
        #[arg(long)]
        quiz_id: Uuid,
        #[arg(long)]
        question: String,
        /// Repeat for each option
        #[arg(long)]
        option: Vec<String>,
        #[arg(long)]
        correct_answer: String,
        #[arg(long)]
        explanation: Option<String>,
        #[arg(long, default_value_t = 0)]
        position: i32,
    },
}

#[tokio::main]
async fn main() -> madrasa::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let db_con = DbConnection::connect(&std::env::var("DATABASE_URL").unwrap())?;
    let mm = ModelManager::new(db_con);
    let actor = AuthenticatedAdmin::system();

    match args.command {
        Commands::Admin { action } => match action {
            AdminCommands::Add {
                username,
                password,
                role,
            } => {
                let admin = AdminAccount::create(
                    &mm,
                    &actor,
                    AdminAccountCreate {
                        username,
                        password_hash: madrasa::auth::hash_password(&password)?,
                        role,
                    },
                )
                .await?;
                println!("Admin created: {:?}", admin);
            }
        },

        Commands::Lecturer { action } => match action {
            LecturerCommands::Add {
                full_name,
                bio,
                photo_file_id,
            } => {
                let lecturer = Lecturer::create(
                    &mm,
                    &actor,
                    LecturerCreate {
                        full_name,
                        bio,
                        photo_file_id,
                    },
                )
                .await?;
                println!("Lecturer created: {:?}", lecturer);
            }
        },

        Commands::Category { action } => match action {
            CategoryCommands::Add {
                title,
                description,
                order_index,
            } => {
                let category = Category::create(
                    &mm,
                    &actor,
                    CategoryCreate {
                        title,
                        description,
                        order_index: Some(order_index),
                    },
                )
                .await?;
                println!("Category created: {:?}", category);
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add {
                category_id,
                lecturer_id,
                title,
                description,
                order_index,
                published,
            } => {
                let lesson = Lesson::create(
                    &mm,
                    &actor,
                    LessonCreate {
                        category_id,
                        lecturer_id,
                        title,
                        description,
                        order_index: Some(order_index),
                        is_published: Some(published),
                    },
                )
                .await?;
                println!("Lesson created: {:?}", lesson);
            }
        },

        Commands::Part { action } => match action {
            PartCommands::Add {
                lesson_id,
                title,
                order_index,
                duration_secs,
                file_id,
                published,
            } => {
                let part = AudioPart::create(
                    &mm,
                    &actor,
                    AudioPartCreate {
                        lesson_id,
                        title,
                        order_index: Some(order_index),
                        is_published: Some(published),
                        duration_secs: Some(duration_secs),
                        file_id,
                    },
                )
                .await?;
                println!("Audio part created: {:?}", part);
            }
        },

        Commands::Quiz { action } => match action {
            QuizCommands::Add {
                audio_part_id,
                name,
                description,
            } => {
                let quiz = Quiz::create(
                    &mm,
                    &actor,
                    QuizCreate {
                        audio_part_id,
                        name,
                        description,
                    },
                )
                .await?;
                println!("Quiz created: {:?}", quiz);
            }
            QuizCommands::AddQuestion {
                quiz_id,
                question,
                option,
                correct_answer,
                explanation,
                position,
            } => {
                let payload = QuizQuestionCreate {
                    quiz_id,
                    position: Some(position),
                    question_text: question,
                    options: option,
                    correct_answer,
                    explanation,
                };

                if !payload.is_consistent() {
                    eprintln!(
                        "need at least two non-empty options and the correct answer among them"
                    );
                    std::process::exit(1);
                }

                let created = QuizQuestion::create(&mm, &actor, payload).await?;
                println!("Question created: {:?}", created);
            }
        },
    }

    Ok(())
}
