//! Built-in challenge catalog.
//!
//! Fixed content, five challenges per tier. The bank is constructed once at
//! startup and injected wherever challenges are drawn, so alternate content
//! can be substituted in tests.

use crate::model::{Challenge, Question, QuestionBank};

/// Builds the built-in question bank.
///
/// # Panics
///
/// Panics if the embedded content is internally inconsistent (an answer
/// line outside its listing); covered by the catalog tests.
#[must_use]
pub fn builtin_bank() -> QuestionBank {
    QuestionBank::new(beginner(), intermediate(), advanced())
}

fn challenge(code: &str, questions: &[(&str, u32)]) -> Challenge {
    let questions = questions
        .iter()
        .map(|&(prompt, line)| {
            Question::new(prompt, line).expect("built-in question should be valid")
        })
        .collect();
    Challenge::new(code, questions).expect("built-in challenge should be valid")
}

fn beginner() -> Vec<Challenge> {
    vec![
        challenge(
            "total = 0\nfor i in range(5):\n    total += i\nprint(total)",
            &[
                ("Where is total initialized?", 1),
                ("Which line starts the loop?", 2),
                ("Where does the addition happen?", 3),
                ("Which line outputs the result?", 4),
            ],
        ),
        challenge(
            "name = \"Python\"\nlength = len(name)\nprint(length)",
            &[
                ("Where is the variable 'name' created?", 1),
                ("Which line calculates the length?", 2),
                ("Where is the output statement?", 3),
            ],
        ),
        challenge(
            "x = 10\ny = 20\nresult = x + y\nprint(result)",
            &[
                ("Where is x assigned?", 1),
                ("Which line adds x and y?", 3),
                ("Where is y defined?", 2),
            ],
        ),
        challenge(
            "numbers = [1, 2, 3, 4, 5]\nfirst = numbers[0]\nlast = numbers[-1]\nprint(first, last)",
            &[
                ("Where is the list created?", 1),
                ("Which line gets the first element?", 2),
                ("Where is the last element accessed?", 3),
            ],
        ),
        challenge(
            "age = 25\nif age >= 18:\n    print(\"Adult\")\nelse:\n    print(\"Minor\")",
            &[
                ("Where is the condition check?", 2),
                ("Which line prints 'Adult'?", 3),
                ("Where is the else clause?", 4),
            ],
        ),
    ]
}

fn intermediate() -> Vec<Challenge> {
    vec![
        challenge(
            "lower_str = \"\"\nfor letter in my_str:\n    if \"A\" <= letter <= \"Z\":\n        lower_str += chr(ord(letter) + 32)\n    else:\n        lower_str += letter\nreturn lower_str",
            &[
                ("Where does the loop start?", 2),
                ("Which line initializes the empty string?", 1),
                ("Where is the uppercase check condition?", 3),
                ("Which line converts uppercase to lowercase?", 4),
                ("Where is the result returned?", 7),
            ],
        ),
        challenge(
            "total = 0\nfor num in numbers:\n    if num % 2 == 0:\n        total += num\nreturn total",
            &[
                ("Where is the total initialized?", 1),
                ("Which line checks if a number is even?", 3),
                ("Where does the loop begin?", 2),
                ("Which line adds to the total?", 4),
                ("Where is the result returned?", 5),
            ],
        ),
        challenge(
            "def find_max(lst):\n    max_val = lst[0]\n    for num in lst:\n        if num > max_val:\n            max_val = num\n    return max_val",
            &[
                ("Where is the function defined?", 1),
                ("Which line initializes max_val?", 2),
                ("Where is the comparison?", 4),
                ("Which line updates max_val?", 5),
            ],
        ),
        challenge(
            "words = [\"hello\", \"world\", \"python\"]\nresult = []\nfor word in words:\n    result.append(word.upper())\nprint(result)",
            &[
                ("Where is the result list initialized?", 2),
                ("Which line converts to uppercase?", 4),
                ("Where does the loop start?", 3),
                ("Which line prints the output?", 5),
            ],
        ),
        challenge(
            "count = 0\nwhile count < 10:\n    if count % 3 == 0:\n        print(count)\n    count += 1",
            &[
                ("Where is the while loop condition?", 2),
                ("Which line checks divisibility by 3?", 3),
                ("Where is count incremented?", 5),
                ("Which line prints the count?", 4),
            ],
        ),
    ]
}

fn advanced() -> Vec<Challenge> {
    vec![
        challenge(
            "result = []\nfor i in range(len(data)):\n    if data[i] > 0:\n        result.append(data[i] * 2)\n    else:\n        result.append(0)\nreturn result",
            &[
                ("Where is the result list created?", 1),
                ("Which line checks if a value is positive?", 3),
                ("Where does the multiplication happen?", 4),
                ("Which line appends zero for negative values?", 6),
                ("Where is the result returned?", 7),
            ],
        ),
        challenge(
            "def fibonacci(n):\n    if n <= 1:\n        return n\n    return fibonacci(n-1) + fibonacci(n-2)\n\nresult = fibonacci(5)",
            &[
                ("Where does the function definition start?", 1),
                ("Which line contains the base case check?", 2),
                ("Where is the recursive call?", 4),
                ("Which line calls the function?", 6),
                ("Where is the base case return?", 3),
            ],
        ),
        challenge(
            "matrix = [[1, 2], [3, 4], [5, 6]]\nflat = []\nfor row in matrix:\n    for item in row:\n        flat.append(item)\nprint(flat)",
            &[
                ("Where is the matrix defined?", 1),
                ("Which line starts the outer loop?", 3),
                ("Where is the inner loop?", 4),
                ("Which line appends to flat?", 5),
            ],
        ),
        challenge(
            "def quick_sort(arr):\n    if len(arr) <= 1:\n        return arr\n    pivot = arr[len(arr) // 2]\n    left = [x for x in arr if x < pivot]\n    middle = [x for x in arr if x == pivot]\n    right = [x for x in arr if x > pivot]\n    return quick_sort(left) + middle + quick_sort(right)",
            &[
                ("Where is the base case?", 2),
                ("Which line selects the pivot?", 4),
                ("Where is the left partition created?", 5),
                ("Which line contains the recursive calls?", 8),
                ("Where is the right partition?", 7),
            ],
        ),
        challenge(
            "class Node:\n    def __init__(self, data):\n        self.data = data\n        self.next = None\n\nhead = Node(1)\nhead.next = Node(2)",
            &[
                ("Where is the class defined?", 1),
                ("Which line initializes the data attribute?", 3),
                ("Where is the next pointer set to None?", 4),
                ("Which line creates the first node?", 6),
                ("Where is the second node linked?", 7),
            ],
        ),
    ]
}
